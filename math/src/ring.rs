pub mod impl_u64;

use crate::dft::DFT;
use crate::modulus::barrett::Barrett;
use crate::modulus::prime::Prime;
use num_bigint::BigInt;
use std::rc::Rc;

/// The ring Z_q[X]/(X^n+1) for a single NTT-friendly prime q.
pub struct Ring<O> {
    pub n: usize,
    pub modulus: Prime<O>,
    pub dft: Box<dyn DFT<O>>,
}

/// The ring Z_Q[X]/(X^n+1) with Q the product of the primes of its limbs.
pub struct RingRNS<O> {
    rings: Vec<Rc<Ring<O>>>,
    crt: CrtBasis<O>,
}

/// Constants for the CRT reconstruction x = sum_i [x_i * (Q/q_i)^-1]_{q_i} * Q/q_i mod Q.
pub(crate) struct CrtBasis<O> {
    pub(crate) q: BigInt,
    pub(crate) q_half: BigInt,
    pub(crate) q_hat: Vec<BigInt>,
    pub(crate) q_hat_inv: Vec<Barrett<O>>,
}
