//! Property-based tests for the statistics reducer.

use hebench::TimingStatistics;
use proptest::prelude::*;

proptest! {
    /// Property: mean == sum / len
    #[test]
    fn prop_mean_is_average(samples in prop::collection::vec(0.0f64..10.0, 1..200)) {
        let stats = TimingStatistics::from_samples(&samples).unwrap();
        let want: f64 = samples.iter().sum::<f64>() / samples.len() as f64;
        prop_assert!((stats.mean - want).abs() <= 1e-9 * want.max(1.0));
    }

    /// Property: stddev >= 0
    #[test]
    fn prop_stddev_is_non_negative(samples in prop::collection::vec(0.0f64..10.0, 1..200)) {
        let stats = TimingStatistics::from_samples(&samples).unwrap();
        prop_assert!(stats.stddev >= 0.0);
        prop_assert!(stats.stddev.is_finite());
    }

    /// Property: a constant series has mean v and stddev 0
    #[test]
    fn prop_constant_series(v in 0.0f64..10.0, n in 1usize..200) {
        let stats = TimingStatistics::from_samples(&vec![v; n]).unwrap();
        prop_assert!((stats.mean - v).abs() <= 1e-12 * v.max(1.0));
        prop_assert!(stats.stddev <= 1e-6 * v.max(1.0));
    }
}
