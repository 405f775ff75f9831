use math::poly::PolyRNS;

/// Ciphertext (c_0, ..., c_d) over R_Q, every component in the NTT domain.
/// Decrypts to c_0 + c_1 s + ... + c_d s^d.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext(pub Vec<PolyRNS<u64>>);

impl Ciphertext {
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    pub fn at(&self, i: usize) -> &PolyRNS<u64> {
        &self.0[i]
    }

    pub fn at_mut(&mut self, i: usize) -> &mut PolyRNS<u64> {
        &mut self.0[i]
    }
}
