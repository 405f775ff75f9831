pub mod barrett;
pub mod montgomery;
pub mod prime;

/// Largest supported bit size of a word modulus.
pub const MAX_MODULUS_BITS: u32 = 61;

pub trait WordOps<O> {
    /// Number of bits needed to represent values in [0, self).
    fn log2(self) -> O;
    fn reverse_bits_msb(self, n: u32) -> O;
    fn mask(self) -> O;
}

impl WordOps<u64> for u64 {
    #[inline(always)]
    fn log2(self) -> u64 {
        (u64::BITS - (self - 1).leading_zeros()) as _
    }
    #[inline(always)]
    fn reverse_bits_msb(self, n: u32) -> u64 {
        self.reverse_bits() >> (u64::BITS - n)
    }
    #[inline(always)]
    fn mask(self) -> u64 {
        if self.log2() == 64 {
            u64::MAX
        } else {
            (1 << self.log2()) - 1
        }
    }
}

impl WordOps<usize> for usize {
    #[inline(always)]
    fn log2(self) -> usize {
        (usize::BITS - (self - 1).leading_zeros()) as _
    }
    #[inline(always)]
    fn reverse_bits_msb(self, n: u32) -> usize {
        self.reverse_bits() >> (usize::BITS - n)
    }
    #[inline(always)]
    fn mask(self) -> usize {
        (1 << self.log2()) - 1
    }
}

pub trait ReduceOnce<O> {
    /// Assigns self-q to self if self >= q.
    /// User must ensure that 2q fits in O.
    fn reduce_once_assign(&mut self, q: O);
    /// Returns self-q if self >= q else self.
    /// User must ensure that 2q fits in O.
    fn reduce_once(&self, q: O) -> O;
}

impl ReduceOnce<u64> for u64 {
    #[inline(always)]
    fn reduce_once_assign(&mut self, q: u64) {
        debug_assert!(q < 0x8000000000000000, "2q >= 2^64");
        *self = (*self).min(self.wrapping_sub(q))
    }

    #[inline(always)]
    fn reduce_once(&self, q: u64) -> u64 {
        debug_assert!(q < 0x8000000000000000, "2q >= 2^64");
        (*self).min(self.wrapping_sub(q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_ops() {
        assert_eq!(65537u64.log2(), 17);
        assert_eq!(65536u64.log2(), 16);
        assert_eq!(65537u64.mask(), (1 << 17) - 1);
        assert_eq!(1usize.reverse_bits_msb(3), 4);
        assert_eq!(6usize.reverse_bits_msb(3), 3);
    }

    #[test]
    fn reduce_once() {
        let q: u64 = 97;
        assert_eq!(96u64.reduce_once(q), 96);
        assert_eq!(97u64.reduce_once(q), 0);
        assert_eq!(193u64.reduce_once(q), 96);
        let mut x: u64 = 150;
        x.reduce_once_assign(q);
        assert_eq!(x, 53);
    }
}
