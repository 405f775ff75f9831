use crate::ciphertext::Ciphertext;
use crate::context::RlweContext;
use crate::keys::PublicKey;
use math::poly::PolyRNS;
use math::ring::RingRNS;
use sampling::Source;

impl RlweContext {
    /// Returns a fresh public-key encryption of zero
    /// (b u + error_scale * e_0, a u + error_scale * e_1), u ternary.
    pub(crate) fn encrypt_zero(
        &self,
        pk: &PublicKey,
        source: &mut Source,
        error_scale: u64,
    ) -> Ciphertext {
        let ring: &RingRNS<u64> = self.ring_q();
        let mut source_xu: Source = source.branch();
        let mut source_xe: Source = source.branch();

        let mut u: PolyRNS<u64> = ring.new_polyrns();
        ring.fill_ternary(&mut source_xu, &mut u);
        ring.ntt_inplace(&mut u);

        let c: Vec<PolyRNS<u64>> = [&pk.b, &pk.a]
            .iter()
            .map(|k| {
                let mut e: PolyRNS<u64> = ring.new_polyrns();
                ring.fill_gaussian(&mut source_xe, self.xe(), &mut e);
                ring.ntt_inplace(&mut e);
                if error_scale != 1 {
                    ring.mul_scalar_inplace(error_scale, &mut e);
                }
                ring.mul_add_inplace(k, &u, &mut e);
                e
            })
            .collect();

        Ciphertext(c)
    }
}
