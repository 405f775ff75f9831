use schemes::SchemeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("trial count must be at least 1")]
    ZeroTrials,

    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
