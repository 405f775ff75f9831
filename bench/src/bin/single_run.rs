use anyhow::Result;
use hebench::{BenchConfig, SchemeConfig, report, run_trials};
use schemes::{Bfv, Bgv, Scheme};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt};

fn run<S: Scheme>(scheme: &SchemeConfig) -> Result<()> {
    let config: BenchConfig = BenchConfig::new(1)?;
    let results = run_trials::<S>(scheme, &config)?;
    let mut stdout = io::stdout().lock();
    report::write_single_run(&mut stdout, scheme, S::NAME, &results)?;
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

    run::<Bgv>(&SchemeConfig::bgv())?;
    run::<Bfv>(&SchemeConfig::bfv())?;
    Ok(())
}
