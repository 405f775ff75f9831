use crate::modulus::ReduceOnce;

/// An element `x * 2^64 mod q` in the Montgomery domain.
pub type Montgomery<O> = O;

/// MontgomeryPrecomp stores the precomputations for
/// Montgomery arithmetic modulo an odd q < 2^62.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryPrecomp<O> {
    pub q: O,
    /// -q^{-1} mod 2^64
    pub q_inv: O,
    /// 2^128 mod q
    pub r2: O,
    one: Montgomery<O>,
}

impl MontgomeryPrecomp<u64> {
    pub fn new(q: u64) -> MontgomeryPrecomp<u64> {
        assert!(q & 1 == 1, "invalid argument q: q={} is even", q);
        assert!(q < 1 << 62, "invalid argument q: q={} >= 2^62", q);

        // Newton iteration, each step doubles the number of correct bits.
        let mut inv: u64 = 1;
        (0..6).for_each(|_| inv = inv.wrapping_mul(2u64.wrapping_sub(q.wrapping_mul(inv))));
        debug_assert!(q.wrapping_mul(inv) == 1);

        let r: u64 = ((1u128 << 64) % q as u128) as u64;
        let r2: u64 = (r as u128 * r as u128 % q as u128) as u64;

        Self {
            q,
            q_inv: inv.wrapping_neg(),
            r2,
            one: r,
        }
    }

    #[inline(always)]
    pub fn one(&self) -> Montgomery<u64> {
        self.one
    }

    /// Returns x * 2^-64 mod q for x < q * 2^64.
    #[inline(always)]
    pub fn redc(&self, x: u128) -> u64 {
        let m: u64 = (x as u64).wrapping_mul(self.q_inv);
        (((x + m as u128 * self.q as u128) >> 64) as u64).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn prepare(&self, x: u64) -> Montgomery<u64> {
        self.redc(x as u128 * self.r2 as u128)
    }

    #[inline(always)]
    pub fn unprepare(&self, x: Montgomery<u64>) -> u64 {
        self.redc(x as u128)
    }

    /// Returns lhs * rhs mod q with lhs in the Montgomery domain and rhs and the output outside.
    #[inline(always)]
    pub fn mul_external(&self, lhs: Montgomery<u64>, rhs: u64) -> u64 {
        self.redc(lhs as u128 * rhs as u128)
    }

    /// Returns lhs * rhs mod q with both operands and the output in the Montgomery domain.
    #[inline(always)]
    pub fn mul_internal(&self, lhs: Montgomery<u64>, rhs: Montgomery<u64>) -> Montgomery<u64> {
        self.redc(lhs as u128 * rhs as u128)
    }

    #[inline(always)]
    pub fn mul_internal_assign(&self, lhs: Montgomery<u64>, rhs: &mut Montgomery<u64>) {
        *rhs = self.mul_internal(lhs, *rhs)
    }

    /// Returns a * b mod q, no operand in the Montgomery domain.
    #[inline(always)]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        self.mul_external(self.mul_internal(a, b), self.r2)
    }

    /// Returns x^exponent mod q, x and the output in the Montgomery domain.
    pub fn pow(&self, x: Montgomery<u64>, exponent: u64) -> Montgomery<u64> {
        let mut y: Montgomery<u64> = self.one;
        let mut x: Montgomery<u64> = x;
        let mut i: u64 = exponent;
        while i > 0 {
            if i & 1 == 1 {
                self.mul_internal_assign(x, &mut y);
            }
            x = self.mul_internal(x, x);
            i >>= 1;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn montgomery_roundtrip_and_mul() {
        let q: u64 = 0x1fffffffffe00001;
        let m: MontgomeryPrecomp<u64> = MontgomeryPrecomp::new(q);
        let xs: [u64; 5] = [0, 1, 2, 1 << 40, q - 1];
        xs.iter()
            .for_each(|&x| assert_eq!(m.unprepare(m.prepare(x)), x));
        xs.iter().for_each(|&x| {
            xs.iter().for_each(|&y| {
                let want: u64 = (x as u128 * y as u128 % q as u128) as u64;
                assert_eq!(m.mul(x, y), want);
                assert_eq!(m.mul_external(m.prepare(x), y), want);
            })
        });
    }

    #[test]
    fn montgomery_pow() {
        let q: u64 = 65537;
        let m: MontgomeryPrecomp<u64> = MontgomeryPrecomp::new(q);
        assert_eq!(m.unprepare(m.pow(m.prepare(3), q - 1)), 1);
        assert_eq!(m.unprepare(m.pow(m.prepare(2), 10)), 1024);
    }
}
