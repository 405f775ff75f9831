use crate::modulus::barrett::BarrettPrecomp;
use crate::modulus::montgomery::{Montgomery, MontgomeryPrecomp};
use crate::modulus::{MAX_MODULUS_BITS, ReduceOnce};
use prime_factorization::Factorization;

/// Returns true if x is prime.
pub fn is_prime(x: u64) -> bool {
    x > 1 && primality_test::is_prime(x)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prime<O> {
    pub q: O,
    /// q-1
    pub phi: O,
    /// Distinct prime factors of q-1.
    pub factors: Vec<O>,
    pub barrett: BarrettPrecomp<O>,
    pub montgomery: MontgomeryPrecomp<O>,
}

impl Prime<u64> {
    /// Returns a new instance of Prime<u64>.
    /// Panics if q is not an odd prime below 2^61.
    pub fn new(q: u64) -> Self {
        assert!(
            q > 2 && is_prime(q),
            "invalid argument q: q={} is not an odd prime",
            q
        );
        Self::new_unchecked(q)
    }

    /// Returns a new instance of Prime<u64> without checking the primality of q.
    pub fn new_unchecked(q: u64) -> Self {
        assert!(
            q.leading_zeros() >= u64::BITS - MAX_MODULUS_BITS,
            "invalid argument q: q={} >= 2^{}",
            q,
            MAX_MODULUS_BITS
        );
        let mut factors: Vec<u64> = Factorization::run(q - 1).factors;
        factors.sort_unstable();
        factors.dedup();
        Self {
            q,
            phi: q - 1,
            factors,
            barrett: BarrettPrecomp::new(q),
            montgomery: MontgomeryPrecomp::new(q),
        }
    }

    #[inline(always)]
    pub fn q(&self) -> u64 {
        self.q
    }

    #[inline(always)]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        (a + b).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        (a + self.q - b).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn neg(&self, a: u64) -> u64 {
        (self.q - a).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        self.montgomery.mul(a, b)
    }

    /// Maps a signed integer to its representative in [0, q).
    #[inline(always)]
    pub fn from_i64(&self, x: i64) -> u64 {
        let r: u64 = self.barrett.reduce(x.unsigned_abs());
        if x < 0 { self.neg(r) } else { r }
    }

    /// Returns x^exponent mod q.
    pub fn pow(&self, x: u64, exponent: u64) -> u64 {
        let x_mont: Montgomery<u64> = self.montgomery.prepare(self.barrett.reduce(x));
        self.montgomery
            .unprepare(self.montgomery.pow(x_mont, exponent))
    }

    /// Returns x^-1 mod q.
    /// Panics if x = 0 mod q.
    pub fn inv(&self, x: u64) -> u64 {
        let x: u64 = self.barrett.reduce(x);
        assert!(x != 0, "invalid argument x: x = 0 mod q={}", self.q);
        self.pow(x, self.phi - 1)
    }

    /// Returns the smallest generator of the multiplicative group Z_q^*.
    pub fn primitive_root(&self) -> u64 {
        let mut candidate: u64 = 1;
        loop {
            candidate += 1;
            if self
                .factors
                .iter()
                .all(|&factor| self.pow(candidate, self.phi / factor) != 1)
            {
                return candidate;
            }
        }
    }

    /// Returns a primitive nth_root-th root of unity.
    /// Panics if nth_root does not divide q-1.
    pub fn primitive_nth_root(&self, nth_root: u64) -> u64 {
        assert!(
            self.phi % nth_root == 0,
            "invalid argument nth_root: q-1={} is not divisible by nth_root={}",
            self.phi,
            nth_root
        );
        let psi: u64 = self.pow(self.primitive_root(), self.phi / nth_root);
        debug_assert!(nth_root < 2 || self.pow(psi, nth_root >> 1) == self.q - 1);
        psi
    }
}

/// Iterator over the primes q = 1 mod nth_root of exactly `bit_size` bits,
/// in decreasing order starting from 2^bit_size. Ends once the search
/// falls below 2^(bit_size-1).
pub struct NttFriendlyPrimes {
    nth_root: u64,
    next_candidate: u64,
    floor: u64,
}

impl NttFriendlyPrimes {
    pub fn new(bit_size: u32, nth_root: u64) -> Self {
        assert!(
            (2..=MAX_MODULUS_BITS).contains(&bit_size),
            "invalid argument bit_size: bit_size={} not in [2, {}]",
            bit_size,
            MAX_MODULUS_BITS
        );
        assert!(
            nth_root.is_power_of_two(),
            "invalid argument nth_root: nth_root={} is not a power of two",
            nth_root
        );
        let top: u64 = 1 << bit_size;
        Self {
            nth_root,
            next_candidate: (top + 1).saturating_sub(nth_root),
            floor: top >> 1,
        }
    }
}

impl Iterator for NttFriendlyPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.next_candidate > self.floor {
            let candidate: u64 = self.next_candidate;
            self.next_candidate = candidate.saturating_sub(self.nth_root);
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_arithmetic() {
        let prime: Prime<u64> = Prime::new(65537);
        assert_eq!(prime.add(65536, 2), 1);
        assert_eq!(prime.sub(1, 2), 65536);
        assert_eq!(prime.neg(0), 0);
        assert_eq!(prime.from_i64(-1), 65536);
        assert_eq!(prime.from_i64(65538), 1);
        assert_eq!(prime.mul(prime.inv(12345), 12345), 1);
        assert_eq!(prime.primitive_root(), 3);
    }

    #[test]
    fn primitive_nth_root_has_exact_order() {
        let prime: Prime<u64> = Prime::new(65537);
        let psi: u64 = prime.primitive_nth_root(1 << 14);
        assert_eq!(prime.pow(psi, 1 << 14), 1);
        assert_eq!(prime.pow(psi, 1 << 13), 65536);
    }

    #[test]
    fn ntt_friendly_primes_are_distinct_and_well_formed() {
        let nth_root: u64 = 1 << 14;
        let primes: Vec<u64> = NttFriendlyPrimes::new(50, nth_root).take(3).collect();
        assert_eq!(primes.len(), 3);
        primes.iter().for_each(|&q| {
            assert!(is_prime(q));
            assert_eq!(q % nth_root, 1);
            assert_eq!(64 - q.leading_zeros(), 50);
        });
        assert!(primes.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn is_prime_on_known_values() {
        [2u64, 3, 97, 65537, 0x1fffffffffffffff]
            .iter()
            .for_each(|&x| assert!(is_prime(x), "x={x}"));
        // 561 and 41041 are Carmichael numbers, the last one is (2^31-1)^2.
        [0u64, 1, 4, 561, 41041, 65535, 0x3fffffff00000001]
            .iter()
            .for_each(|&x| assert!(!is_prime(x), "x={x}"));
    }

    #[test]
    fn ntt_friendly_primes_at_production_sizes() {
        let nth_root: u64 = 1 << 14;
        [50u32, 55, 60].iter().for_each(|&bits| {
            let primes: Vec<u64> = NttFriendlyPrimes::new(bits, nth_root).take(3).collect();
            assert_eq!(primes.len(), 3);
            primes.iter().for_each(|&q| {
                assert_eq!(q % nth_root, 1);
                assert_eq!(64 - q.leading_zeros(), bits);
                let prime: Prime<u64> = Prime::new(q);
                assert_eq!(prime.pow(prime.primitive_nth_root(nth_root), nth_root), 1);
            });
        });
    }

    #[test]
    fn ntt_friendly_primes_exhaust() {
        // q = 1 mod 16 with 4 bits: only 17 would qualify, and it has 5 bits.
        assert_eq!(NttFriendlyPrimes::new(4, 16).next(), None);
    }
}
