use crate::dft::DFT;
use crate::modulus::barrett::{Barrett, BarrettPrecomp};
use crate::modulus::prime::Prime;
use crate::modulus::{ReduceOnce, WordOps};
use itertools::izip;

/// Precomputed tables for the negacyclic NTT of length n modulo q = 1 mod 2n.
///
/// The forward transform is a Cooley-Tukey butterfly network fed with the powers
/// of a primitive 2n-th root psi in bit-reversed order; the backward transform is
/// the matching Gentleman-Sande network followed by a multiplication by n^-1.
pub struct Table<O> {
    prime: Prime<O>,
    n: usize,
    psi_forward_rev: Vec<Barrett<O>>,
    psi_backward_rev: Vec<Barrett<O>>,
    n_inv: Barrett<O>,
}

impl Table<u64> {
    pub fn new(prime: Prime<u64>, n: usize) -> Self {
        assert!(
            n.is_power_of_two() && n >= 2,
            "invalid argument n: n={} is not a power of two >= 2",
            n
        );

        let psi: u64 = prime.primitive_nth_root((n << 1) as u64);
        let psi_inv: u64 = prime.inv(psi);
        let log_n: u32 = n.trailing_zeros();
        let barrett: BarrettPrecomp<u64> = prime.barrett;

        let mut psi_forward_rev: Vec<Barrett<u64>> = vec![Barrett(0, 0); n];
        let mut psi_backward_rev: Vec<Barrett<u64>> = vec![Barrett(0, 0); n];

        let mut powers_forward: u64 = 1;
        let mut powers_backward: u64 = 1;

        (0..n).for_each(|i| {
            let i_rev: usize = i.reverse_bits_msb(log_n);
            psi_forward_rev[i_rev] = barrett.prepare(powers_forward);
            psi_backward_rev[i_rev] = barrett.prepare(powers_backward);
            powers_forward = prime.mul(powers_forward, psi);
            powers_backward = prime.mul(powers_backward, psi_inv);
        });

        let n_inv: Barrett<u64> = barrett.prepare(prime.inv(n as u64));

        Self {
            prime,
            n,
            psi_forward_rev,
            psi_backward_rev,
            n_inv,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    #[inline(always)]
    fn dit(&self, a: &mut u64, b: &mut u64, psi: Barrett<u64>) {
        let q: u64 = self.prime.q;
        let v: u64 = self.prime.barrett.mul_external(psi, *b);
        let u: u64 = *a;
        *a = (u + v).reduce_once(q);
        *b = (u + q - v).reduce_once(q);
    }

    #[inline(always)]
    fn dif(&self, a: &mut u64, b: &mut u64, psi: Barrett<u64>) {
        let q: u64 = self.prime.q;
        let (u, v) = (*a, *b);
        *a = (u + v).reduce_once(q);
        *b = self.prime.barrett.mul_external(psi, u + q - v);
    }
}

impl DFT<u64> for Table<u64> {
    fn forward_inplace(&self, a: &mut [u64]) {
        assert_eq!(
            a.len(),
            self.n,
            "invalid argument a: a.len()={} != n={}",
            a.len(),
            self.n
        );
        let mut t: usize = self.n;
        let mut m: usize = 1;
        while m < self.n {
            t >>= 1;
            izip!(a.chunks_exact_mut(t << 1), &self.psi_forward_rev[m..]).for_each(
                |(chunk, psi)| {
                    let (lo, hi) = chunk.split_at_mut(t);
                    izip!(lo, hi).for_each(|(x, y)| self.dit(x, y, *psi));
                },
            );
            m <<= 1;
        }
    }

    fn backward_inplace(&self, a: &mut [u64]) {
        assert_eq!(
            a.len(),
            self.n,
            "invalid argument a: a.len()={} != n={}",
            a.len(),
            self.n
        );
        let mut t: usize = 1;
        let mut m: usize = self.n;
        while m > 1 {
            let h: usize = m >> 1;
            izip!(a.chunks_exact_mut(t << 1), &self.psi_backward_rev[h..]).for_each(
                |(chunk, psi)| {
                    let (lo, hi) = chunk.split_at_mut(t);
                    izip!(lo, hi).for_each(|(x, y)| self.dif(x, y, *psi));
                },
            );
            t <<= 1;
            m = h;
        }
        a.iter_mut()
            .for_each(|x| self.prime.barrett.mul_external_assign(self.n_inv, x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ntt_roundtrip() {
        let n: usize = 16;
        let table: Table<u64> = Table::new(Prime::new(65537), n);
        let want: Vec<u64> = (0..n as u64).map(|i| i * 4099 % 65537).collect();
        let mut have: Vec<u64> = want.clone();
        table.forward_inplace(&mut have);
        assert_ne!(have, want);
        table.backward_inplace(&mut have);
        assert_eq!(have, want);
    }

    #[test]
    fn ntt_of_constant_is_constant() {
        let n: usize = 8;
        let table: Table<u64> = Table::new(Prime::new(97), n);
        let mut a: Vec<u64> = vec![0; n];
        a[0] = 5;
        table.forward_inplace(&mut a);
        assert!(a.iter().all(|&x| x == 5));
    }
}
