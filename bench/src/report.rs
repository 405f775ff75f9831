use crate::config::{BenchConfig, ECHOED_SLOTS, SchemeConfig};
use crate::driver::{Phase, TrialResults};
use crate::stats::TimingStatistics;
use std::io::{self, Write};

const RULE: &str = "------------------";

/// "Average <label>: <mean>±<stddev> s"
pub fn statistical_line(label: &str, stats: &TimingStatistics) -> String {
    format!("Average {}: {:.6}±{:.6} s", label, stats.mean, stats.stddev)
}

/// "<Label>: <seconds> s"
pub fn single_run_line(label: &str, seconds: f64) -> String {
    format!("{}: {:.6} s", label, seconds)
}

/// First values of the decoded result, each followed by a space.
pub fn echoed_slots(values: &[u64]) -> String {
    values
        .iter()
        .take(ECHOED_SLOTS)
        .map(|v| format!("{} ", v))
        .collect()
}

fn write_header<W: Write>(
    w: &mut W,
    scheme: &SchemeConfig,
    name: &str,
    results: &TrialResults,
) -> io::Result<()> {
    writeln!(w, "{} {} Performance Test", scheme.library, name)?;
    writeln!(w, "{}", RULE)?;
    writeln!(w, "Using plaintext modulus: {}", results.plaintext_modulus)?;
    writeln!(w, "Number of slots: {}", results.slots)
}

pub fn write_statistical<W: Write>(
    w: &mut W,
    scheme: &SchemeConfig,
    name: &str,
    config: &BenchConfig,
    results: &TrialResults,
) -> io::Result<()> {
    write_header(w, scheme, name, results)?;
    writeln!(w, "Performing {} iterations...", config.trials())?;
    for (phase, samples) in results.series.iter() {
        if let Some(stats) = TimingStatistics::from_samples(samples) {
            writeln!(w, "{}", statistical_line(phase.statistical_label(), &stats))?;
        }
    }
    writeln!(
        w,
        "Decrypted result (first {} values): {}",
        ECHOED_SLOTS,
        echoed_slots(&results.decrypted)
    )
}

/// Writes the durations of the first trial of results.
pub fn write_single_run<W: Write>(
    w: &mut W,
    scheme: &SchemeConfig,
    name: &str,
    results: &TrialResults,
) -> io::Result<()> {
    write_header(w, scheme, name, results)?;
    for phase in Phase::ALL {
        if let Some(seconds) = results.series.get(phase).first() {
            writeln!(w, "{}", single_run_line(phase.single_run_label(), *seconds))?;
        }
    }
    writeln!(
        w,
        "Decrypted result (first {} values): {}",
        ECHOED_SLOTS,
        echoed_slots(&results.decrypted)
    )
}
