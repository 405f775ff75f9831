use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

const MAXF64: f64 = 9007199254740992.0;

/// Deterministic randomness source backed by ChaCha8.
///
/// Every secret, mask and error polynomial is drawn from a [Source]; seeding
/// two sources identically replays the exact same stream, which is what the
/// tests rely on.
pub struct Source {
    source: ChaCha8Rng,
}

/// Returns 32 bytes of fresh entropy from the thread-local generator.
pub fn new_seed() -> [u8; 32] {
    let mut seed: [u8; 32] = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    /// Derives an independent source seeded from this one.
    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Uniform value in [0, max) by rejection on `mask`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        debug_assert!(max != 0, "invalid argument max: max=0");
        debug_assert!(
            mask >= max - 1,
            "invalid argument mask: mask={} < max-1={}",
            mask,
            max - 1
        );
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    #[inline(always)]
    pub fn next_f64(&mut self, min: f64, max: f64) -> f64 {
        min + ((self.next_u64() >> 11) as f64) / MAXF64 * (max - min)
    }

    /// Uniform value in {-1, 0, 1}.
    #[inline(always)]
    pub fn next_ternary(&mut self) -> i64 {
        self.next_u64n(3, 3) as i64 - 1
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
