use crate::ciphertext::Ciphertext;
use crate::context::RlweContext;
use crate::keys::SecretKey;
use math::poly::PolyRNS;
use math::ring::RingRNS;
use num_bigint::BigInt;

impl RlweContext {
    /// Returns the coefficients of c_0 + c_1 s + ... + c_d s^d mod Q,
    /// centered in (-Q/2, Q/2].
    pub(crate) fn phase(&self, sk: &SecretKey, ct: &Ciphertext) -> Vec<BigInt> {
        let ring: &RingRNS<u64> = self.ring_q();
        let mut acc: PolyRNS<u64> = ct.at(ct.degree()).clone();
        (0..ct.degree()).rev().for_each(|i| {
            ring.mul_inplace(&sk.0, &mut acc);
            ring.add_inplace(ct.at(i), &mut acc);
        });
        ring.intt_inplace(&mut acc);
        let mut coeffs: Vec<BigInt> = vec![BigInt::default(); ring.n()];
        ring.to_bigint(&acc, &mut coeffs);
        coeffs
    }
}
