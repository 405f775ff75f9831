/// Population mean and standard deviation of a phase series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingStatistics {
    pub mean: f64,
    pub stddev: f64,
}

impl TimingStatistics {
    /// Returns None on an empty series.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n: f64 = samples.len() as f64;
        let (sum, sum_sq) = samples
            .iter()
            .fold((0.0f64, 0.0f64), |(s, s2), x| (s + x, s2 + x * x));
        let mean: f64 = sum / n;
        // E[x^2] - E[x]^2 can dip below zero from rounding.
        let variance: f64 = (sum_sq / n - mean * mean).max(0.0);
        Some(Self {
            mean,
            stddev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_statistics() {
        assert_eq!(TimingStatistics::from_samples(&[]), None);
    }

    #[test]
    fn known_series() {
        let stats: TimingStatistics =
            TimingStatistics::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.stddev, 2.0);
    }

    #[test]
    fn identical_samples() {
        let stats: TimingStatistics = TimingStatistics::from_samples(&[0.5; 4]).unwrap();
        assert_eq!(stats.mean, 0.5);
        assert_eq!(stats.stddev, 0.0);
    }

    #[test]
    fn single_sample() {
        let stats: TimingStatistics = TimingStatistics::from_samples(&[0.25]).unwrap();
        assert_eq!(stats.mean, 0.25);
        assert_eq!(stats.stddev, 0.0);
    }
}
