use crate::error::{BenchError, Result};
use schemes::ParametersLiteral;
use std::num::NonZeroUsize;

/// Trials per scheme in the statistical run.
pub const TRIALS: usize = 100;

pub const LIBRARY: &str = "hebench";

/// Plaintext modulus of both schemes, a prime = 1 mod 2^16.
pub const PLAINTEXT_MODULUS: u64 = 65537;

/// Standard deviation of the error distribution.
pub const XE: f64 = 3.2;

/// Number of decrypted slots echoed in the report.
pub const ECHOED_SLOTS: usize = 5;

/// An immutable description of one benchmarked scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemeConfig {
    pub library: &'static str,
    pub parameters: ParametersLiteral,
}

impl SchemeConfig {
    /// BGV over the 8192-th cyclotomic (n = 4096), three 50-bit moduli.
    pub fn bgv() -> Self {
        Self {
            library: LIBRARY,
            parameters: ParametersLiteral {
                log_n: 12,
                q: vec![],
                log_q: vec![50, 50, 50],
                t: PLAINTEXT_MODULUS,
                xe: XE,
            },
        }
    }

    /// BFV with n = 8192 and two 55-bit moduli.
    pub fn bfv() -> Self {
        Self {
            library: LIBRARY,
            parameters: ParametersLiteral {
                log_n: 13,
                q: vec![],
                log_q: vec![55, 55],
                t: PLAINTEXT_MODULUS,
                xe: XE,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    trials: NonZeroUsize,
}

impl BenchConfig {
    pub fn new(trials: usize) -> Result<Self> {
        NonZeroUsize::new(trials)
            .map(|trials| Self { trials })
            .ok_or(BenchError::ZeroTrials)
    }

    pub fn trials(&self) -> NonZeroUsize {
        self.trials
    }
}
