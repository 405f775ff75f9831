use crate::error::{Result, SchemeError};
use math::modulus::MAX_MODULUS_BITS;
use math::modulus::prime::{NttFriendlyPrimes, is_prime};
use std::collections::HashMap;
use tracing::debug;

pub const MIN_LOG_N: usize = 2;
pub const MAX_LOG_N: usize = 16;
pub const MIN_MODULUS_BITS: u32 = 2;

/// User-facing description of a parameter set.
///
/// The ciphertext modulus chain is `q` followed by one freshly generated
/// NTT-friendly prime per entry of `log_q`. The plaintext modulus `t` must
/// allow batching, i.e. be a prime `= 1 mod 2n`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParametersLiteral {
    pub log_n: usize,
    pub q: Vec<u64>,
    pub log_q: Vec<u32>,
    pub t: u64,
    /// Standard deviation of the error distribution.
    pub xe: f64,
}

/// A validated parameter set with a concrete modulus chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    log_n: usize,
    q: Vec<u64>,
    t: u64,
    xe: f64,
}

impl Parameters {
    pub fn new(p: &ParametersLiteral) -> Result<Self> {
        if !(MIN_LOG_N..=MAX_LOG_N).contains(&p.log_n) {
            return Err(SchemeError::InvalidDegree {
                log_n: p.log_n,
                min: MIN_LOG_N,
                max: MAX_LOG_N,
            });
        }

        let n: usize = 1 << p.log_n;
        let nth_root: u64 = (n << 1) as u64;

        if !is_ntt_friendly(p.t, nth_root) {
            return Err(SchemeError::BatchingIncompatible { t: p.t, n });
        }

        let mut q: Vec<u64> = Vec::with_capacity(p.q.len() + p.log_q.len());

        for &qi in p.q.iter() {
            if !is_ntt_friendly(qi, nth_root) {
                return Err(SchemeError::InvalidModulus { q: qi, n });
            }
            if q.contains(&qi) {
                return Err(SchemeError::DuplicateModulus(qi));
            }
            q.push(qi);
        }

        let mut generators: HashMap<u32, NttFriendlyPrimes> = HashMap::new();
        for &bits in p.log_q.iter() {
            if !(MIN_MODULUS_BITS..=MAX_MODULUS_BITS).contains(&bits) {
                return Err(SchemeError::InvalidModulusSize {
                    bits,
                    min: MIN_MODULUS_BITS,
                    max: MAX_MODULUS_BITS,
                });
            }
            let generator: &mut NttFriendlyPrimes = generators
                .entry(bits)
                .or_insert_with(|| NttFriendlyPrimes::new(bits, nth_root));
            let qi: u64 = generator
                .find(|qi| !q.contains(qi))
                .ok_or(SchemeError::PrimeSearchExhausted { bits, n })?;
            q.push(qi);
        }

        if q.is_empty() {
            return Err(SchemeError::EmptyModulus);
        }

        debug!(log_n = p.log_n, ?q, t = p.t, xe = p.xe, "parameters");

        Ok(Self {
            log_n: p.log_n,
            q,
            t: p.t,
            xe: p.xe,
        })
    }

    pub fn n(&self) -> usize {
        1 << self.log_n
    }

    pub fn log_n(&self) -> usize {
        self.log_n
    }

    pub fn q(&self) -> &[u64] {
        &self.q
    }

    /// Number of bits of Q, the product of the ciphertext moduli.
    pub fn log_q(&self) -> usize {
        self.q
            .iter()
            .map(|qi| (u64::BITS - qi.leading_zeros()) as usize)
            .sum()
    }

    pub fn t(&self) -> u64 {
        self.t
    }

    pub fn xe(&self) -> f64 {
        self.xe
    }
}

/// Returns true if x is a prime = 1 mod nth_root that fits the word arithmetic.
fn is_ntt_friendly(x: u64, nth_root: u64) -> bool {
    x > 2
        && x.leading_zeros() >= u64::BITS - MAX_MODULUS_BITS
        && x % nth_root == 1
        && is_prime(x)
}
