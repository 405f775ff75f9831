use crate::modulus::barrett::Barrett;
use crate::poly::PolyRNS;
use crate::ring::{CrtBasis, Ring, RingRNS};
use itertools::izip;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::rc::Rc;

/// Returns c mod q in [0, q).
pub fn reduce_bigint(c: &BigInt, q: u64) -> u64 {
    let r: u64 = c
        .magnitude()
        .iter_u64_digits()
        .rev()
        .fold(0u64, |acc, digit| {
            ((((acc as u128) << 64) | digit as u128) % q as u128) as u64
        });
    if c.sign() == Sign::Minus && r != 0 {
        q - r
    } else {
        r
    }
}

impl CrtBasis<u64> {
    fn new(rings: &[Rc<Ring<u64>>]) -> Self {
        let q: BigInt = rings
            .iter()
            .fold(BigInt::from(1u64), |acc, ring| acc * ring.q());
        let q_hat: Vec<BigInt> = rings.iter().map(|ring| &q / ring.q()).collect();
        let q_hat_inv: Vec<Barrett<u64>> = izip!(rings.iter(), q_hat.iter())
            .map(|(ring, q_hat)| {
                let prime = &ring.modulus;
                prime
                    .barrett
                    .prepare(prime.inv(reduce_bigint(q_hat, prime.q)))
            })
            .collect();
        Self {
            q_half: &q >> 1,
            q,
            q_hat,
            q_hat_inv,
        }
    }
}

impl RingRNS<u64> {
    /// Panics if rings is empty, if the rings do not share the same degree,
    /// or if two rings share the same modulus.
    pub fn new(rings: Vec<Rc<Ring<u64>>>) -> Self {
        assert!(!rings.is_empty(), "invalid argument rings: rings is empty");
        let n: usize = rings[0].n();
        rings.iter().enumerate().for_each(|(i, ring)| {
            assert!(
                ring.n() == n,
                "invalid argument rings: rings[{}].n()={} != rings[0].n()={}",
                i,
                ring.n(),
                n
            );
            assert!(
                rings[..i].iter().all(|other| other.q() != ring.q()),
                "invalid argument rings: duplicate modulus q={}",
                ring.q()
            );
        });
        let crt: CrtBasis<u64> = CrtBasis::new(&rings);
        Self { rings, crt }
    }

    pub fn from_moduli(n: usize, moduli: &[u64]) -> Self {
        Self::new(
            moduli
                .iter()
                .map(|&q| Rc::new(Ring::<u64>::new(n, q)))
                .collect(),
        )
    }

    /// Returns the ring over the basis of self followed by `moduli`.
    /// The limbs of self are shared, not rebuilt.
    pub fn extend(&self, moduli: &[u64]) -> Self {
        let mut rings: Vec<Rc<Ring<u64>>> = self.rings.clone();
        rings.extend(
            moduli
                .iter()
                .map(|&q| Rc::new(Ring::<u64>::new(self.n(), q))),
        );
        Self::new(rings)
    }

    pub fn n(&self) -> usize {
        self.rings[0].n()
    }

    pub fn log_n(&self) -> usize {
        self.rings[0].log_n()
    }

    pub fn level(&self) -> usize {
        self.rings.len() - 1
    }

    pub fn rings(&self) -> &[Rc<Ring<u64>>] {
        &self.rings
    }

    pub fn at(&self, level: usize) -> &Rc<Ring<u64>> {
        assert!(
            level <= self.level(),
            "invalid argument level: level={} > self.level()={}",
            level,
            self.level()
        );
        &self.rings[level]
    }

    pub fn moduli(&self) -> Vec<u64> {
        self.rings.iter().map(|ring| ring.q()).collect()
    }

    /// Returns Q, the product of the moduli.
    pub fn modulus(&self) -> &BigInt {
        &self.crt.q
    }

    pub fn new_polyrns(&self) -> PolyRNS<u64> {
        PolyRNS::<u64>::new(self.n(), self.level())
    }

    #[inline(always)]
    fn check(&self, a: &PolyRNS<u64>) {
        debug_assert!(
            a.level() >= self.level(),
            "invalid argument a: a.level()={} < self.level()={}",
            a.level(),
            self.level()
        );
    }

    pub fn ntt_inplace(&self, a: &mut PolyRNS<u64>) {
        self.check(a);
        izip!(self.rings.iter(), a.0.iter_mut()).for_each(|(ring, a)| ring.ntt_inplace(a));
    }

    pub fn intt_inplace(&self, a: &mut PolyRNS<u64>) {
        self.check(a);
        izip!(self.rings.iter(), a.0.iter_mut()).for_each(|(ring, a)| ring.intt_inplace(a));
    }

    /// c <- a + b
    pub fn add(&self, a: &PolyRNS<u64>, b: &PolyRNS<u64>, c: &mut PolyRNS<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(self.rings.iter(), a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(ring, a, b, c)| ring.add(a, b, c));
    }

    /// b <- b + a
    pub fn add_inplace(&self, a: &PolyRNS<u64>, b: &mut PolyRNS<u64>) {
        self.check(a);
        self.check(b);
        izip!(self.rings.iter(), a.0.iter(), b.0.iter_mut())
            .for_each(|(ring, a, b)| ring.add_inplace(a, b));
    }

    /// c <- a - b
    pub fn sub(&self, a: &PolyRNS<u64>, b: &PolyRNS<u64>, c: &mut PolyRNS<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(self.rings.iter(), a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(ring, a, b, c)| ring.sub(a, b, c));
    }

    /// b <- b - a
    pub fn sub_inplace(&self, a: &PolyRNS<u64>, b: &mut PolyRNS<u64>) {
        self.check(a);
        self.check(b);
        izip!(self.rings.iter(), a.0.iter(), b.0.iter_mut())
            .for_each(|(ring, a, b)| ring.sub_inplace(a, b));
    }

    pub fn neg_inplace(&self, a: &mut PolyRNS<u64>) {
        self.check(a);
        izip!(self.rings.iter(), a.0.iter_mut()).for_each(|(ring, a)| ring.neg_inplace(a));
    }

    /// c <- a * b, coefficient-wise on every limb.
    pub fn mul(&self, a: &PolyRNS<u64>, b: &PolyRNS<u64>, c: &mut PolyRNS<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(self.rings.iter(), a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(ring, a, b, c)| ring.mul(a, b, c));
    }

    /// b <- b * a, coefficient-wise on every limb.
    pub fn mul_inplace(&self, a: &PolyRNS<u64>, b: &mut PolyRNS<u64>) {
        self.check(a);
        self.check(b);
        izip!(self.rings.iter(), a.0.iter(), b.0.iter_mut())
            .for_each(|(ring, a, b)| ring.mul_inplace(a, b));
    }

    /// c <- c + a * b, coefficient-wise on every limb.
    pub fn mul_add_inplace(&self, a: &PolyRNS<u64>, b: &PolyRNS<u64>, c: &mut PolyRNS<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(self.rings.iter(), a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(ring, a, b, c)| ring.mul_add_inplace(a, b, c));
    }

    /// a <- a * scalar
    pub fn mul_scalar_inplace(&self, scalar: u64, a: &mut PolyRNS<u64>) {
        self.check(a);
        izip!(self.rings.iter(), a.0.iter_mut())
            .for_each(|(ring, a)| ring.mul_scalar_inplace(scalar, a));
    }

    /// a <- a * scalar, for a scalar of arbitrary size.
    pub fn mul_bigint_scalar_inplace(&self, scalar: &BigInt, a: &mut PolyRNS<u64>) {
        self.check(a);
        izip!(self.rings.iter(), a.0.iter_mut())
            .for_each(|(ring, a)| ring.mul_scalar_inplace(reduce_bigint(scalar, ring.q()), a));
    }

    /// a <- values, the same small signed polynomial on every limb.
    pub fn from_i64(&self, values: &[i64], a: &mut PolyRNS<u64>) {
        self.check(a);
        izip!(self.rings.iter(), a.0.iter_mut()).for_each(|(ring, a)| ring.from_i64(values, a));
    }

    /// Writes into `coeffs` the centered representatives in (-Q/2, Q/2] of the
    /// coefficients of a, which must be in the coefficient domain.
    pub fn to_bigint(&self, a: &PolyRNS<u64>, coeffs: &mut [BigInt]) {
        self.check(a);
        assert!(
            coeffs.len() == self.n(),
            "invalid argument coeffs: coeffs.len()={} != self.n()={}",
            coeffs.len(),
            self.n()
        );
        let crt: &CrtBasis<u64> = &self.crt;
        coeffs.iter_mut().enumerate().for_each(|(j, coeff)| {
            let mut acc: BigInt = BigInt::zero();
            izip!(
                self.rings.iter(),
                a.0.iter(),
                crt.q_hat.iter(),
                crt.q_hat_inv.iter()
            )
            .for_each(|(ring, a, q_hat, q_hat_inv)| {
                let y: u64 = ring.modulus.barrett.mul_external(*q_hat_inv, a.0[j]);
                acc += q_hat * y;
            });
            acc %= &crt.q;
            if acc > crt.q_half {
                acc -= &crt.q;
            }
            *coeff = acc;
        });
    }

    /// a <- coeffs mod Q, in the coefficient domain.
    pub fn from_bigint(&self, coeffs: &[BigInt], a: &mut PolyRNS<u64>) {
        self.check(a);
        assert!(
            coeffs.len() == self.n(),
            "invalid argument coeffs: coeffs.len()={} != self.n()={}",
            coeffs.len(),
            self.n()
        );
        izip!(self.rings.iter(), a.0.iter_mut()).for_each(|(ring, a)| {
            izip!(coeffs.iter(), a.0.iter_mut())
                .for_each(|(c, a)| *a = reduce_bigint(c, ring.q()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_bigint_handles_sign_and_size() {
        let q: u64 = 65537;
        assert_eq!(reduce_bigint(&BigInt::from(-1), q), q - 1);
        assert_eq!(reduce_bigint(&BigInt::from(-(q as i64)), q), 0);
        let big: BigInt = BigInt::from(u64::MAX) * BigInt::from(u64::MAX) + 5u64;
        let want: u64 = ((u64::MAX as u128 % q as u128).pow(2) % q as u128 + 5) as u64 % q;
        assert_eq!(reduce_bigint(&big, q), want);
    }

    #[test]
    fn extend_shares_limbs() {
        let ring: RingRNS<u64> = RingRNS::from_moduli(16, &[97, 193]);
        let extended: RingRNS<u64> = ring.extend(&[257]);
        assert_eq!(extended.moduli(), vec![97, 193, 257]);
        assert!(Rc::ptr_eq(ring.at(0), extended.at(0)));
        assert_eq!(*extended.modulus(), BigInt::from(97u64 * 193 * 257));
    }
}
