use crate::modulus::ReduceOnce;

/// A constant `value` prepared for Shoup multiplication,
/// with `quotient = floor(value * 2^64 / q)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Barrett<O>(pub O, pub O);

impl<O> Barrett<O> {
    #[inline(always)]
    pub fn value(&self) -> &O {
        &self.0
    }

    #[inline(always)]
    pub fn quotient(&self) -> &O {
        &self.1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarrettPrecomp<O> {
    pub q: O,
    pub two_q: O,
    pub four_q: O,
    /// floor(2^64 / q)
    pub lo: O,
}

impl BarrettPrecomp<u64> {
    pub fn new(q: u64) -> BarrettPrecomp<u64> {
        assert!(
            q > 2 && q & 1 == 1,
            "invalid argument q: q={} must be odd and > 2",
            q
        );
        assert!(q < 1 << 62, "invalid argument q: q={} >= 2^62", q);
        Self {
            q,
            two_q: q << 1,
            four_q: q << 2,
            lo: u64::MAX / q,
        }
    }

    #[inline(always)]
    pub fn prepare(&self, v: u64) -> Barrett<u64> {
        debug_assert!(v < self.q, "invalid argument v: v={} >= q={}", v, self.q);
        let quotient: u64 = (((v as u128) << 64) / self.q as u128) as _;
        Barrett(v, quotient)
    }

    /// Returns x mod q for any x.
    #[inline(always)]
    pub fn reduce(&self, x: u64) -> u64 {
        let quotient: u64 = ((x as u128 * self.lo as u128) >> 64) as _;
        (x - quotient * self.q).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn reduce_assign(&mut self, x: &mut u64) {
        *x = self.reduce(*x)
    }

    /// Returns lhs * rhs mod q in [0, q).
    #[inline(always)]
    pub fn mul_external(&self, lhs: Barrett<u64>, rhs: u64) -> u64 {
        let t: u64 = ((*lhs.quotient() as u128 * rhs as u128) >> 64) as _;
        lhs.value()
            .wrapping_mul(rhs)
            .wrapping_sub(self.q.wrapping_mul(t))
            .reduce_once(self.q)
    }

    #[inline(always)]
    pub fn mul_external_assign(&self, lhs: Barrett<u64>, rhs: &mut u64) {
        *rhs = self.mul_external(lhs, *rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barrett_reduce_matches_rem() {
        let q: u64 = 0x1fffffffffe00001;
        let barrett: BarrettPrecomp<u64> = BarrettPrecomp::new(q);
        [0u64, 1, q - 1, q, q + 1, 2 * q + 5, u64::MAX, u64::MAX - 17]
            .iter()
            .for_each(|&x| assert_eq!(barrett.reduce(x), x % q, "x={x}"));
    }

    #[test]
    fn shoup_mul_matches_u128() {
        let q: u64 = 0x1fffffffffe00001;
        let barrett: BarrettPrecomp<u64> = BarrettPrecomp::new(q);
        let a: Barrett<u64> = barrett.prepare(q - 3);
        [0u64, 1, 12345, q - 1, q + 7, u64::MAX]
            .iter()
            .for_each(|&x| {
                let want: u64 = ((q - 3) as u128 * x as u128 % q as u128) as u64;
                assert_eq!(barrett.mul_external(a, x), want, "x={x}");
            });
    }
}
