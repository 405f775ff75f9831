pub mod ntt;

/// In-place transform over a ring of integers, forward into the evaluation
/// domain and backward into the coefficient domain.
pub trait DFT<O> {
    fn forward_inplace(&self, x: &mut [O]);
    fn backward_inplace(&self, x: &mut [O]);
}
