use crate::ciphertext::Ciphertext;
use crate::context::RlweContext;
use crate::encoding::Plaintext;
use crate::error::{Result, SchemeError};
use crate::evaluator::{check_degree, tensor};
use crate::keys::{KeySet, PublicKey, SecretKey};
use crate::parameters::Parameters;
use crate::scheme::Scheme;
use math::modulus::prime::NttFriendlyPrimes;
use math::poly::{Poly, PolyRNS};
use math::ring::RingRNS;
use math::ring::impl_u64::ring_rns::reduce_bigint;
use num_bigint::BigInt;
use num_integer::Integer;
use sampling::Source;
use tracing::debug;

/// Bit size of the auxiliary primes used for the tensor product.
pub const AUX_MODULUS_BITS: u32 = 60;

/// BFV: the message sits in the high bits, scaled by Δ = floor(Q/t).
pub struct Bfv;

pub struct BfvContext {
    rlwe: RlweContext,
    /// R_QP, the ciphertext ring extended by the auxiliary basis P.
    ring_qp: RingRNS<u64>,
    delta: BigInt,
}

impl BfvContext {
    pub fn new(params: &Parameters) -> Result<Self> {
        let rlwe: RlweContext = RlweContext::new(params)?;

        // The tensor of two centered ciphertexts has coefficients below n Q^2 / 2,
        // which QP must represent exactly.
        let log_p_min: usize = params.log_q() + params.log_n() + 3;
        let count: usize = log_p_min.div_ceil(AUX_MODULUS_BITS as usize - 1);
        let p: Vec<u64> = NttFriendlyPrimes::new(AUX_MODULUS_BITS, (params.n() << 1) as u64)
            .filter(|p| !params.q().contains(p))
            .take(count)
            .collect();
        if p.len() < count {
            return Err(SchemeError::PrimeSearchExhausted {
                bits: AUX_MODULUS_BITS,
                n: params.n(),
            });
        }
        debug!(?p, "bfv auxiliary basis");

        let ring_qp: RingRNS<u64> = rlwe.ring_q().extend(&p);
        let delta: BigInt = rlwe.q() / params.t();

        Ok(Self {
            rlwe,
            ring_qp,
            delta,
        })
    }

    pub fn ring_qp(&self) -> &RingRNS<u64> {
        &self.ring_qp
    }

    pub fn delta(&self) -> &BigInt {
        &self.delta
    }

    /// Returns a polynomial of R_Q (NTT domain) lifted to R_QP (NTT domain)
    /// through its centered representative.
    fn extend(&self, a: &PolyRNS<u64>) -> PolyRNS<u64> {
        let ring_q: &RingRNS<u64> = self.rlwe.ring_q();
        let mut a_q: PolyRNS<u64> = a.clone();
        ring_q.intt_inplace(&mut a_q);
        let mut coeffs: Vec<BigInt> = vec![BigInt::default(); ring_q.n()];
        ring_q.to_bigint(&a_q, &mut coeffs);
        let mut a_qp: PolyRNS<u64> = self.ring_qp.new_polyrns();
        self.ring_qp.from_bigint(&coeffs, &mut a_qp);
        self.ring_qp.ntt_inplace(&mut a_qp);
        a_qp
    }

    /// Returns round(t * a / Q) mod Q for a polynomial a of R_QP (NTT domain),
    /// in the NTT domain of R_Q.
    fn scale_down(&self, a: &PolyRNS<u64>) -> PolyRNS<u64> {
        let ring_q: &RingRNS<u64> = self.rlwe.ring_q();
        let mut a_qp: PolyRNS<u64> = a.clone();
        self.ring_qp.intt_inplace(&mut a_qp);
        let mut coeffs: Vec<BigInt> = vec![BigInt::default(); ring_q.n()];
        self.ring_qp.to_bigint(&a_qp, &mut coeffs);
        let q: &BigInt = self.rlwe.q();
        let t: u64 = self.rlwe.plaintext_modulus();
        coeffs
            .iter_mut()
            .for_each(|x| *x = round_div(&(&*x * t), q));
        let mut a_q: PolyRNS<u64> = ring_q.new_polyrns();
        ring_q.from_bigint(&coeffs, &mut a_q);
        ring_q.ntt_inplace(&mut a_q);
        a_q
    }
}

/// Returns round(x / q) = floor((2x + q) / 2q), ties rounded up.
fn round_div(x: &BigInt, q: &BigInt) -> BigInt {
    ((x << 1u32) + q).div_floor(&(q << 1u32))
}

impl Scheme for Bfv {
    const NAME: &'static str = "BFV";

    type Context = BfvContext;

    fn context(params: &Parameters) -> Result<BfvContext> {
        BfvContext::new(params)
    }

    fn rlwe(context: &BfvContext) -> &RlweContext {
        &context.rlwe
    }

    fn generate_keys(context: &BfvContext, source: &mut Source) -> KeySet {
        context.rlwe.generate_keys(source, 1)
    }

    /// (b u + e_0 + Δ m, a u + e_1)
    fn encrypt(
        context: &BfvContext,
        pk: &PublicKey,
        pt: &Plaintext,
        source: &mut Source,
    ) -> Result<Ciphertext> {
        let rlwe: &RlweContext = &context.rlwe;
        let mut m: PolyRNS<u64> = rlwe.lift_plaintext(pt)?;
        rlwe.ring_q().mul_bigint_scalar_inplace(&context.delta, &mut m);
        let mut ct: Ciphertext = rlwe.encrypt_zero(pk, source, 1);
        rlwe.ring_q().add_inplace(&m, ct.at_mut(0));
        Ok(ct)
    }

    /// Tensors in R_QP then scales each component by t/Q back into R_Q.
    fn mul(context: &BfvContext, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        check_degree(a, 1)?;
        check_degree(b, 1)?;
        let a_qp: Vec<PolyRNS<u64>> = a.0.iter().map(|c| context.extend(c)).collect();
        let b_qp: Vec<PolyRNS<u64>> = b.0.iter().map(|c| context.extend(c)).collect();
        let d: Vec<PolyRNS<u64>> = tensor(&context.ring_qp, &a_qp, &b_qp);
        Ok(Ciphertext(d.iter().map(|c| context.scale_down(c)).collect()))
    }

    /// round(t [c_0 + c_1 s + ...]_Q / Q) mod t
    fn decrypt(context: &BfvContext, sk: &SecretKey, ct: &Ciphertext) -> Result<Plaintext> {
        let rlwe: &RlweContext = &context.rlwe;
        let q: &BigInt = rlwe.q();
        let t: u64 = rlwe.plaintext_modulus();
        let phase: Vec<BigInt> = rlwe.phase(sk, ct);
        Ok(Plaintext(Poly(
            phase
                .iter()
                .map(|x| reduce_bigint(&round_div(&(x * t), q), t))
                .collect(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_div_rounds_half_up() {
        let q: BigInt = BigInt::from(10);
        assert_eq!(round_div(&BigInt::from(14), &q), BigInt::from(1));
        assert_eq!(round_div(&BigInt::from(15), &q), BigInt::from(2));
        assert_eq!(round_div(&BigInt::from(-14), &q), BigInt::from(-1));
        assert_eq!(round_div(&BigInt::from(-16), &q), BigInt::from(-2));
    }
}
