//! Latency benchmark of the BGV and BFV primitives.
//!
//! A run builds a fresh context, keys and ciphertexts in every trial and times
//! six phases with [timer::measure]; [stats::TimingStatistics] reduces each
//! phase series and [report] prints the result.

pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod stats;
pub mod timer;

pub use config::{BenchConfig, SchemeConfig};
pub use driver::{Phase, PhaseSeries, TrialResults, run_trials};
pub use error::{BenchError, Result};
pub use stats::TimingStatistics;
