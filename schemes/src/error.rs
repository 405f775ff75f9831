use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error("invalid ring degree: log_n={log_n} not in [{min}, {max}]")]
    InvalidDegree {
        log_n: usize,
        min: usize,
        max: usize,
    },

    #[error("plaintext modulus t={t} does not support batching for n={n}: t must be a prime = 1 mod 2n")]
    BatchingIncompatible { t: u64, n: usize },

    #[error("invalid ciphertext modulus q={q} for n={n}: q must be a prime = 1 mod 2n below 2^61")]
    InvalidModulus { q: u64, n: usize },

    #[error("invalid ciphertext modulus size: {bits} bits not in [{min}, {max}]")]
    InvalidModulusSize { bits: u32, min: u32, max: u32 },

    #[error("duplicate ciphertext modulus q={0}")]
    DuplicateModulus(u64),

    #[error("empty ciphertext modulus chain")]
    EmptyModulus,

    #[error("no {bits}-bit NTT-friendly prime left for n={n}")]
    PrimeSearchExhausted { bits: u32, n: usize },

    #[error("invalid error distribution: {0}")]
    InvalidNoise(#[from] rand_distr::NormalError),

    #[error("too many slot values: {len} > {slots} slots")]
    TooManySlots { len: usize, slots: usize },

    #[error("invalid plaintext: {len} coefficients for degree n={n}")]
    InvalidPlaintext { len: usize, n: usize },

    #[error("ciphertext degree mismatch: expected {expected}, found {found}")]
    DegreeMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, SchemeError>;
