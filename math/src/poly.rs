/// A polynomial of degree < n over a single word modulus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Poly<O>(pub Vec<O>);

impl<O> Poly<O>
where
    O: Default + Clone + Copy,
{
    pub fn new(n: usize) -> Self {
        Self(vec![O::default(); n])
    }

    pub fn n(&self) -> usize {
        self.0.len()
    }

    pub fn log_n(&self) -> usize {
        self.n().trailing_zeros() as usize
    }

    pub fn zero(&mut self) {
        self.0.iter_mut().for_each(|x| *x = O::default());
    }

    pub fn copy_from(&mut self, other: &Poly<O>) {
        debug_assert_eq!(self.n(), other.n());
        self.0.copy_from_slice(&other.0)
    }
}

/// A polynomial in RNS representation: one limb per prime of the basis.
/// A PolyRNS of level l carries l+1 limbs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolyRNS<O>(pub Vec<Poly<O>>);

impl<O> PolyRNS<O>
where
    O: Default + Clone + Copy,
{
    pub fn new(n: usize, level: usize) -> Self {
        Self((0..level + 1).map(|_| Poly::new(n)).collect())
    }

    pub fn n(&self) -> usize {
        self.0[0].n()
    }

    pub fn log_n(&self) -> usize {
        self.0[0].log_n()
    }

    pub fn level(&self) -> usize {
        self.0.len() - 1
    }

    #[inline(always)]
    pub fn at(&self, level: usize) -> &Poly<O> {
        assert!(
            level <= self.level(),
            "invalid argument level: level={} > self.level()={}",
            level,
            self.level()
        );
        &self.0[level]
    }

    #[inline(always)]
    pub fn at_mut(&mut self, level: usize) -> &mut Poly<O> {
        assert!(
            level <= self.level(),
            "invalid argument level: level={} > self.level()={}",
            level,
            self.level()
        );
        &mut self.0[level]
    }

    pub fn zero(&mut self) {
        self.0.iter_mut().for_each(|poly| poly.zero());
    }

    pub fn copy_from(&mut self, other: &PolyRNS<O>) {
        debug_assert_eq!(self.level(), other.level());
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| a.copy_from(b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poly_rns_shape() {
        let mut a: PolyRNS<u64> = PolyRNS::new(8, 2);
        assert_eq!(a.n(), 8);
        assert_eq!(a.log_n(), 3);
        assert_eq!(a.level(), 2);
        a.at_mut(1).0[3] = 7;
        let mut b: PolyRNS<u64> = PolyRNS::new(8, 2);
        b.copy_from(&a);
        assert_eq!(b.at(1).0[3], 7);
        b.zero();
        assert_eq!(b, PolyRNS::new(8, 2));
    }
}
