use crate::context::RlweContext;
use math::poly::PolyRNS;
use math::ring::RingRNS;
use sampling::Source;
use tracing::trace;

/// Ternary secret s, in the NTT domain.
#[derive(Clone, Debug)]
pub struct SecretKey(pub PolyRNS<u64>);

/// (b, a) = (-a s + e, a), e scaled by the scheme's error scale.
#[derive(Clone, Debug)]
pub struct PublicKey {
    pub b: PolyRNS<u64>,
    pub a: PolyRNS<u64>,
}

/// One encryption of g_i s^2 per RNS limb, where g_i = 1 mod q_i and 0 mod q_j for j != i.
#[derive(Clone, Debug)]
pub struct RelinearizationKey {
    pub b: Vec<PolyRNS<u64>>,
    pub a: Vec<PolyRNS<u64>>,
}

#[derive(Clone, Debug)]
pub struct KeySet {
    pub secret: SecretKey,
    pub public: PublicKey,
    pub relinearization: RelinearizationKey,
}

impl RlweContext {
    /// Returns (b, a) = (-a s + error_scale * e, a) with a uniform and e gaussian.
    pub(crate) fn rlwe_sample(
        &self,
        s: &PolyRNS<u64>,
        source_xa: &mut Source,
        source_xe: &mut Source,
        error_scale: u64,
    ) -> (PolyRNS<u64>, PolyRNS<u64>) {
        let ring: &RingRNS<u64> = self.ring_q();

        let mut a: PolyRNS<u64> = ring.new_polyrns();
        ring.fill_uniform(source_xa, &mut a);

        let mut e: PolyRNS<u64> = ring.new_polyrns();
        ring.fill_gaussian(source_xe, self.xe(), &mut e);
        ring.ntt_inplace(&mut e);
        if error_scale != 1 {
            ring.mul_scalar_inplace(error_scale, &mut e);
        }

        let mut b: PolyRNS<u64> = ring.new_polyrns();
        ring.mul(&a, s, &mut b);
        ring.neg_inplace(&mut b);
        ring.add_inplace(&e, &mut b);
        (b, a)
    }

    /// Generates a secret key, its public key and its relinearization key.
    /// Errors are multiplied by `error_scale`.
    pub(crate) fn generate_keys(&self, source: &mut Source, error_scale: u64) -> KeySet {
        let ring: &RingRNS<u64> = self.ring_q();
        let mut source_xs: Source = source.branch();
        let mut source_xa: Source = source.branch();
        let mut source_xe: Source = source.branch();

        let mut s: PolyRNS<u64> = ring.new_polyrns();
        ring.fill_ternary(&mut source_xs, &mut s);
        ring.ntt_inplace(&mut s);

        let (b, a) = self.rlwe_sample(&s, &mut source_xa, &mut source_xe, error_scale);
        let public: PublicKey = PublicKey { b, a };

        let mut s2: PolyRNS<u64> = ring.new_polyrns();
        ring.mul(&s, &s, &mut s2);

        let mut rlk_b: Vec<PolyRNS<u64>> = Vec::with_capacity(ring.level() + 1);
        let mut rlk_a: Vec<PolyRNS<u64>> = Vec::with_capacity(ring.level() + 1);
        (0..ring.level() + 1).for_each(|i| {
            let (mut b, a) = self.rlwe_sample(&s, &mut source_xa, &mut source_xe, error_scale);
            ring.at(i).add_inplace(s2.at(i), b.at_mut(i));
            rlk_b.push(b);
            rlk_a.push(a);
        });

        trace!(limbs = ring.level() + 1, error_scale, "key set");

        KeySet {
            secret: SecretKey(s),
            public,
            relinearization: RelinearizationKey { b: rlk_b, a: rlk_a },
        }
    }
}
