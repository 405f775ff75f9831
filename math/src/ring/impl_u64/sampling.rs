use crate::modulus::WordOps;
use crate::poly::{Poly, PolyRNS};
use crate::ring::{Ring, RingRNS};
use itertools::izip;
use sampling::{DiscreteGaussian, Source};

impl Ring<u64> {
    pub fn fill_uniform(&self, source: &mut Source, a: &mut Poly<u64>) {
        let max: u64 = self.modulus.q;
        let mask: u64 = max.mask();
        a.0.iter_mut()
            .for_each(|a| *a = source.next_u64n(max, mask));
    }
}

impl RingRNS<u64> {
    /// Fills every limb independently, which is uniform modulo Q.
    pub fn fill_uniform(&self, source: &mut Source, a: &mut PolyRNS<u64>) {
        izip!(self.rings().iter(), a.0.iter_mut())
            .for_each(|(ring, a)| ring.fill_uniform(source, a));
    }

    /// Fills a with a polynomial of coefficients uniform in {-1, 0, 1}
    /// and returns those coefficients.
    pub fn fill_ternary(&self, source: &mut Source, a: &mut PolyRNS<u64>) -> Vec<i64> {
        let values: Vec<i64> = (0..self.n()).map(|_| source.next_ternary()).collect();
        self.from_i64(&values, a);
        values
    }

    /// Fills a with a polynomial of coefficients drawn from the
    /// discrete Gaussian distribution and returns those coefficients.
    pub fn fill_gaussian(
        &self,
        source: &mut Source,
        distribution: &DiscreteGaussian,
        a: &mut PolyRNS<u64>,
    ) -> Vec<i64> {
        let values: Vec<i64> = (0..self.n())
            .map(|_| distribution.sample(source))
            .collect();
        self.from_i64(&values, a);
        values
    }
}
