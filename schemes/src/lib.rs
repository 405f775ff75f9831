//! RLWE-based BGV and BFV schemes over RNS polynomial rings.
//!
//! Both schemes share the same key material layout, batch encoder and
//! relinearization procedure ([context::RlweContext]); they differ in where
//! the message sits in the ciphertext (low bits scaled by `t` errors for BGV,
//! high bits scaled by `Δ = floor(Q/t)` for BFV) and thus in how products are
//! computed and decrypted. Callers go through the [Scheme] trait.

pub mod bfv;
pub mod bgv;
pub mod ciphertext;
pub mod context;
pub mod decryptor;
pub mod encoding;
pub mod encryptor;
pub mod error;
pub mod evaluator;
pub mod keys;
pub mod keyswitch;
pub mod parameters;
pub mod scheme;

pub use bfv::{Bfv, BfvContext};
pub use bgv::{Bgv, BgvContext};
pub use ciphertext::Ciphertext;
pub use context::RlweContext;
pub use encoding::Plaintext;
pub use error::{Result, SchemeError};
pub use keys::{KeySet, PublicKey, RelinearizationKey, SecretKey};
pub use parameters::{Parameters, ParametersLiteral};
pub use scheme::Scheme;
