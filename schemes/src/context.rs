use crate::error::Result;
use crate::parameters::Parameters;
use math::ring::{Ring, RingRNS};
use num_bigint::BigInt;
use sampling::DiscreteGaussian;
use tracing::debug;

/// Everything BGV and BFV share: the ciphertext ring R_Q, the plaintext
/// ring R_t used for slot packing and the error distribution.
pub struct RlweContext {
    params: Parameters,
    ring_q: RingRNS<u64>,
    ring_t: Ring<u64>,
    xe: DiscreteGaussian,
}

impl RlweContext {
    pub fn new(params: &Parameters) -> Result<Self> {
        let xe: DiscreteGaussian = DiscreteGaussian::new(params.xe())?;
        let ring_q: RingRNS<u64> = RingRNS::from_moduli(params.n(), params.q());
        let ring_t: Ring<u64> = Ring::new(params.n(), params.t());
        debug!(
            n = params.n(),
            log_q = params.log_q(),
            t = params.t(),
            "rlwe context"
        );
        Ok(Self {
            params: params.clone(),
            ring_q,
            ring_t,
            xe,
        })
    }

    pub fn ring_q(&self) -> &RingRNS<u64> {
        &self.ring_q
    }

    pub fn ring_t(&self) -> &Ring<u64> {
        &self.ring_t
    }

    pub fn xe(&self) -> &DiscreteGaussian {
        &self.xe
    }

    pub fn n(&self) -> usize {
        self.params.n()
    }

    /// Number of plaintext slots, equal to the ring degree.
    pub fn slots(&self) -> usize {
        self.params.n()
    }

    pub fn plaintext_modulus(&self) -> u64 {
        self.params.t()
    }

    /// Returns Q, the product of the ciphertext moduli.
    pub fn q(&self) -> &BigInt {
        self.ring_q.modulus()
    }
}
