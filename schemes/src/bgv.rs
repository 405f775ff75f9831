use crate::ciphertext::Ciphertext;
use crate::context::RlweContext;
use crate::encoding::Plaintext;
use crate::error::Result;
use crate::evaluator::{check_degree, tensor};
use crate::keys::{KeySet, PublicKey, SecretKey};
use crate::parameters::Parameters;
use crate::scheme::Scheme;
use math::poly::{Poly, PolyRNS};
use math::ring::impl_u64::ring_rns::reduce_bigint;
use num_bigint::BigInt;
use sampling::Source;

/// BGV: the message sits in the low bits, every error is a multiple of t.
pub struct Bgv;

pub struct BgvContext {
    rlwe: RlweContext,
}

impl Scheme for Bgv {
    const NAME: &'static str = "BGV";

    type Context = BgvContext;

    fn context(params: &Parameters) -> Result<BgvContext> {
        Ok(BgvContext {
            rlwe: RlweContext::new(params)?,
        })
    }

    fn rlwe(context: &BgvContext) -> &RlweContext {
        &context.rlwe
    }

    fn generate_keys(context: &BgvContext, source: &mut Source) -> KeySet {
        let rlwe: &RlweContext = &context.rlwe;
        rlwe.generate_keys(source, rlwe.plaintext_modulus())
    }

    /// (b u + t e_0 + m, a u + t e_1)
    fn encrypt(
        context: &BgvContext,
        pk: &PublicKey,
        pt: &Plaintext,
        source: &mut Source,
    ) -> Result<Ciphertext> {
        let rlwe: &RlweContext = &context.rlwe;
        let m: PolyRNS<u64> = rlwe.lift_plaintext(pt)?;
        let mut ct: Ciphertext = rlwe.encrypt_zero(pk, source, rlwe.plaintext_modulus());
        rlwe.ring_q().add_inplace(&m, ct.at_mut(0));
        Ok(ct)
    }

    fn mul(context: &BgvContext, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        check_degree(a, 1)?;
        check_degree(b, 1)?;
        Ok(Ciphertext(tensor(context.rlwe.ring_q(), &a.0, &b.0)))
    }

    /// [c_0 + c_1 s + ...]_Q mod t
    fn decrypt(context: &BgvContext, sk: &SecretKey, ct: &Ciphertext) -> Result<Plaintext> {
        let rlwe: &RlweContext = &context.rlwe;
        let t: u64 = rlwe.plaintext_modulus();
        let phase: Vec<BigInt> = rlwe.phase(sk, ct);
        Ok(Plaintext(Poly(
            phase.iter().map(|x| reduce_bigint(x, t)).collect(),
        )))
    }
}
