use crate::ciphertext::Ciphertext;
use crate::context::RlweContext;
use crate::error::Result;
use crate::evaluator::check_degree;
use crate::keys::RelinearizationKey;
use itertools::izip;
use math::poly::PolyRNS;
use math::ring::RingRNS;
use tracing::trace;

impl RlweContext {
    /// Maps a degree-2 ciphertext (d_0, d_1, d_2) to a degree-1 ciphertext
    /// decrypting to the same message.
    ///
    /// d_2 is split into its RNS digits D_i = [d_2]_{q_i}, each lifted to every
    /// limb, so that d_2 = sum_i D_i g_i mod Q; the key pairs (b_i, a_i)
    /// encrypt g_i s^2 and the output is (d_0 + sum_i D_i b_i, d_1 + sum_i D_i a_i).
    pub fn relinearize(&self, rlk: &RelinearizationKey, ct: &Ciphertext) -> Result<Ciphertext> {
        check_degree(ct, 2)?;

        let ring: &RingRNS<u64> = self.ring_q();
        let mut c0: PolyRNS<u64> = ct.at(0).clone();
        let mut c1: PolyRNS<u64> = ct.at(1).clone();

        let mut d2: PolyRNS<u64> = ct.at(2).clone();
        ring.intt_inplace(&mut d2);

        let mut digit: PolyRNS<u64> = ring.new_polyrns();
        izip!(d2.0.iter(), rlk.b.iter(), rlk.a.iter()).for_each(|(d2_i, b_i, a_i)| {
            izip!(ring.rings().iter(), digit.0.iter_mut())
                .for_each(|(r, digit)| r.reduce_from(&d2_i.0, digit));
            ring.ntt_inplace(&mut digit);
            ring.mul_add_inplace(&digit, b_i, &mut c0);
            ring.mul_add_inplace(&digit, a_i, &mut c1);
        });

        trace!(digits = rlk.b.len(), "relinearized");

        Ok(Ciphertext(vec![c0, c1]))
    }
}
