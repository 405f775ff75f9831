use rand_distr::{Distribution, Normal, NormalError};

use crate::source::Source;

/// Samples are rejected beyond this many standard deviations.
pub const TAIL_CUT: f64 = 6.0;

/// Rounded gaussian truncated at [TAIL_CUT] standard deviations.
#[derive(Clone, Debug)]
pub struct DiscreteGaussian {
    normal: Normal<f64>,
    sigma: f64,
    bound: f64,
}

impl DiscreteGaussian {
    pub fn new(sigma: f64) -> Result<Self, NormalError> {
        Ok(Self {
            normal: Normal::new(0.0, sigma)?,
            sigma,
            bound: TAIL_CUT * sigma,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn sample(&self, source: &mut Source) -> i64 {
        loop {
            let x: f64 = self.normal.sample(source);
            if x.abs() <= self.bound {
                return x.round() as i64;
            }
        }
    }
}
