use crate::ciphertext::Ciphertext;
use crate::context::RlweContext;
use crate::encoding::Plaintext;
use crate::error::Result;
use crate::keys::{KeySet, PublicKey, RelinearizationKey, SecretKey};
use crate::parameters::Parameters;
use sampling::Source;

/// A batched RLWE scheme, as driven by the benchmark harness.
pub trait Scheme {
    const NAME: &'static str;

    type Context;

    fn context(params: &Parameters) -> Result<Self::Context>;

    fn rlwe(context: &Self::Context) -> &RlweContext;

    fn generate_keys(context: &Self::Context, source: &mut Source) -> KeySet;

    fn encode(context: &Self::Context, values: &[u64]) -> Result<Plaintext> {
        Self::rlwe(context).encode(values)
    }

    fn decode(context: &Self::Context, pt: &Plaintext) -> Vec<u64> {
        Self::rlwe(context).decode(pt)
    }

    fn encrypt(
        context: &Self::Context,
        pk: &PublicKey,
        pt: &Plaintext,
        source: &mut Source,
    ) -> Result<Ciphertext>;

    fn add(context: &Self::Context, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        Self::rlwe(context).add(a, b)
    }

    /// Returns the degree-2 product of two degree-1 ciphertexts.
    fn mul(context: &Self::Context, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext>;

    fn relinearize(
        context: &Self::Context,
        rlk: &RelinearizationKey,
        ct: &Ciphertext,
    ) -> Result<Ciphertext> {
        Self::rlwe(context).relinearize(rlk, ct)
    }

    fn decrypt(context: &Self::Context, sk: &SecretKey, ct: &Ciphertext) -> Result<Plaintext>;
}
