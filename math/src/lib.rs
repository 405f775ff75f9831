//! Word-size modular arithmetic and RNS polynomial rings over `Z_q[X]/(X^n+1)`.
//!
//! Every modulus is an NTT-friendly prime `q = 1 mod 2n` below 2^61, so that
//! lazy sums of up to four residues fit in a `u64`. Polynomials carry one limb
//! per prime of the RNS basis; conversion to and from arbitrary-precision
//! integers goes through the CRT ([ring::RingRNS::to_bigint],
//! [ring::RingRNS::from_bigint]).

pub mod dft;
pub mod modulus;
pub mod poly;
pub mod ring;
