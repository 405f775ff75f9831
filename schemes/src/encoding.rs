use crate::context::RlweContext;
use crate::error::{Result, SchemeError};
use math::poly::{Poly, PolyRNS};
use math::ring::{Ring, RingRNS};

/// A plaintext polynomial of R_t, coefficients in [0, t).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plaintext(pub Poly<u64>);

impl Plaintext {
    pub fn n(&self) -> usize {
        self.0.n()
    }
}

impl RlweContext {
    /// Packs up to `slots()` values, each taken mod t, into a plaintext.
    /// Missing slots are zero.
    pub fn encode(&self, values: &[u64]) -> Result<Plaintext> {
        if values.len() > self.slots() {
            return Err(SchemeError::TooManySlots {
                len: values.len(),
                slots: self.slots(),
            });
        }
        let ring_t: &Ring<u64> = self.ring_t();
        let mut pt: Poly<u64> = ring_t.new_poly();
        ring_t.reduce_from(values, &mut pt);
        ring_t.intt_inplace(&mut pt);
        Ok(Plaintext(pt))
    }

    pub fn decode(&self, pt: &Plaintext) -> Vec<u64> {
        let mut values: Poly<u64> = pt.0.clone();
        self.ring_t().ntt_inplace(&mut values);
        values.0
    }

    /// Returns pt lifted to R_Q with representatives in (-t/2, t/2], in the NTT domain.
    pub(crate) fn lift_plaintext(&self, pt: &Plaintext) -> Result<PolyRNS<u64>> {
        if pt.n() != self.n() {
            return Err(SchemeError::InvalidPlaintext {
                len: pt.n(),
                n: self.n(),
            });
        }
        let t: u64 = self.plaintext_modulus();
        let values: Vec<i64> = pt
            .0
            .0
            .iter()
            .map(|&x| {
                if x > t >> 1 {
                    x as i64 - t as i64
                } else {
                    x as i64
                }
            })
            .collect();
        let ring_q: &RingRNS<u64> = self.ring_q();
        let mut m: PolyRNS<u64> = ring_q.new_polyrns();
        ring_q.from_i64(&values, &mut m);
        ring_q.ntt_inplace(&mut m);
        Ok(m)
    }
}
