pub mod distributions;
pub mod source;

pub use distributions::DiscreteGaussian;
pub use source::{Source, new_seed};
