use crate::ciphertext::Ciphertext;
use crate::context::RlweContext;
use crate::error::{Result, SchemeError};
use itertools::izip;
use math::poly::PolyRNS;
use math::ring::RingRNS;

impl RlweContext {
    /// Returns a + b. Ciphertexts of different degrees are added
    /// component-wise, the result takes the larger degree.
    pub fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        let (long, short) = if a.degree() >= b.degree() { (a, b) } else { (b, a) };
        let mut c: Ciphertext = long.clone();
        izip!(short.0.iter(), c.0.iter_mut()).for_each(|(x, y)| self.ring_q().add_inplace(x, y));
        c
    }
}

/// Returns an error unless ct has the expected degree.
pub(crate) fn check_degree(ct: &Ciphertext, expected: usize) -> Result<()> {
    if ct.degree() != expected {
        return Err(SchemeError::DegreeMismatch {
            expected,
            found: ct.degree(),
        });
    }
    Ok(())
}

/// Returns the degree-2 tensor (a_0 b_0, a_0 b_1 + a_1 b_0, a_1 b_1)
/// of two degree-1 ciphertexts given in the NTT domain of `ring`.
pub(crate) fn tensor(
    ring: &RingRNS<u64>,
    a: &[PolyRNS<u64>],
    b: &[PolyRNS<u64>],
) -> Vec<PolyRNS<u64>> {
    debug_assert!(a.len() == 2 && b.len() == 2);
    let mut d0: PolyRNS<u64> = ring.new_polyrns();
    let mut d1: PolyRNS<u64> = ring.new_polyrns();
    let mut d2: PolyRNS<u64> = ring.new_polyrns();
    ring.mul(&a[0], &b[0], &mut d0);
    ring.mul(&a[0], &b[1], &mut d1);
    ring.mul_add_inplace(&a[1], &b[0], &mut d1);
    ring.mul(&a[1], &b[1], &mut d2);
    vec![d0, d1, d2]
}
