use anyhow::Result;
use hebench::config::TRIALS;
use hebench::{BenchConfig, SchemeConfig, report, run_trials};
use schemes::{Bfv, Bgv, Scheme};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt};

fn run<S: Scheme>(scheme: &SchemeConfig, config: &BenchConfig) -> Result<()> {
    let results = run_trials::<S>(scheme, config)?;
    let mut stdout = io::stdout().lock();
    report::write_statistical(&mut stdout, scheme, S::NAME, config, &results)?;
    writeln!(stdout)?;
    Ok(())
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config: BenchConfig = BenchConfig::new(TRIALS)?;
    run::<Bgv>(&SchemeConfig::bgv(), &config)?;
    run::<Bfv>(&SchemeConfig::bfv(), &config)?;
    Ok(())
}
