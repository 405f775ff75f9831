use crate::dft::ntt::Table;
use crate::modulus::barrett::Barrett;
use crate::modulus::prime::Prime;
use crate::poly::Poly;
use crate::ring::Ring;
use itertools::izip;

impl Ring<u64> {
    pub fn new(n: usize, q: u64) -> Self {
        let prime: Prime<u64> = Prime::<u64>::new(q);
        Self {
            n,
            dft: Box::new(Table::new(prime.clone(), n)),
            modulus: prime,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn log_n(&self) -> usize {
        self.n.trailing_zeros() as usize
    }

    pub fn q(&self) -> u64 {
        self.modulus.q
    }

    pub fn new_poly(&self) -> Poly<u64> {
        Poly::<u64>::new(self.n())
    }

    #[inline(always)]
    fn check(&self, a: &Poly<u64>) {
        debug_assert!(
            a.n() == self.n(),
            "invalid argument: a.n()={} != self.n()={}",
            a.n(),
            self.n()
        );
    }

    pub fn ntt_inplace(&self, a: &mut Poly<u64>) {
        self.check(a);
        self.dft.forward_inplace(&mut a.0)
    }

    pub fn intt_inplace(&self, a: &mut Poly<u64>) {
        self.check(a);
        self.dft.backward_inplace(&mut a.0)
    }

    /// c <- a + b
    pub fn add(&self, a: &Poly<u64>, b: &Poly<u64>, c: &mut Poly<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(a, b, c)| *c = self.modulus.add(*a, *b));
    }

    /// b <- b + a
    pub fn add_inplace(&self, a: &Poly<u64>, b: &mut Poly<u64>) {
        self.check(a);
        self.check(b);
        izip!(a.0.iter(), b.0.iter_mut()).for_each(|(a, b)| *b = self.modulus.add(*a, *b));
    }

    /// c <- a - b
    pub fn sub(&self, a: &Poly<u64>, b: &Poly<u64>, c: &mut Poly<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(a, b, c)| *c = self.modulus.sub(*a, *b));
    }

    /// b <- b - a
    pub fn sub_inplace(&self, a: &Poly<u64>, b: &mut Poly<u64>) {
        self.check(a);
        self.check(b);
        izip!(a.0.iter(), b.0.iter_mut()).for_each(|(a, b)| *b = self.modulus.sub(*b, *a));
    }

    pub fn neg_inplace(&self, a: &mut Poly<u64>) {
        self.check(a);
        a.0.iter_mut().for_each(|a| *a = self.modulus.neg(*a));
    }

    /// c <- a * b, coefficient-wise. Both operands are expected in the NTT domain
    /// for the result to be their ring product.
    pub fn mul(&self, a: &Poly<u64>, b: &Poly<u64>, c: &mut Poly<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(a, b, c)| *c = self.modulus.mul(*a, *b));
    }

    /// b <- b * a, coefficient-wise.
    pub fn mul_inplace(&self, a: &Poly<u64>, b: &mut Poly<u64>) {
        self.check(a);
        self.check(b);
        izip!(a.0.iter(), b.0.iter_mut()).for_each(|(a, b)| *b = self.modulus.mul(*a, *b));
    }

    /// c <- c + a * b, coefficient-wise.
    pub fn mul_add_inplace(&self, a: &Poly<u64>, b: &Poly<u64>, c: &mut Poly<u64>) {
        self.check(a);
        self.check(b);
        self.check(c);
        izip!(a.0.iter(), b.0.iter(), c.0.iter_mut())
            .for_each(|(a, b, c)| *c = self.modulus.add(*c, self.modulus.mul(*a, *b)));
    }

    /// a <- a * scalar
    pub fn mul_scalar_inplace(&self, scalar: u64, a: &mut Poly<u64>) {
        self.check(a);
        let scalar: Barrett<u64> = self
            .modulus
            .barrett
            .prepare(self.modulus.barrett.reduce(scalar));
        a.0.iter_mut()
            .for_each(|a| self.modulus.barrett.mul_external_assign(scalar, a));
    }

    /// a <- values mod q, for arbitrary u64 values.
    pub fn reduce_from(&self, values: &[u64], a: &mut Poly<u64>) {
        self.check(a);
        izip!(values.iter(), a.0.iter_mut())
            .for_each(|(v, a)| *a = self.modulus.barrett.reduce(*v));
    }

    /// a <- values mod q, for signed values.
    pub fn from_i64(&self, values: &[i64], a: &mut Poly<u64>) {
        self.check(a);
        izip!(values.iter(), a.0.iter_mut()).for_each(|(v, a)| *a = self.modulus.from_i64(*v));
    }
}
