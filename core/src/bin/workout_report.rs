//! workout-report: skriver én sammendragslinje per sensorpakke.
//!
//! ```bash
//! workout-report                       # demodata
//! workout-report --input batch.json    # [{"workout_type": "RUN", "data": [15000, 1, 75]}, ...]
//! RUST_LOG=debug workout-report --json --metrics
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use workout_core::{
    demo_packages, load_packages, run_batch, write_outcome, ErrorPolicy, Metrics, OutputFormat,
};

#[derive(Parser)]
#[command(name = "workout-report", about = "Distance, speed and calories per workout")]
struct Cli {
    /// JSON-batch med sensorpakker (default: demodata)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Stopp ved første feil i stedet for å hoppe over pakken
    #[arg(long)]
    fail_fast: bool,

    /// Skriv avledede nøkkeltall som JSON-linjer
    #[arg(long)]
    json: bool,

    /// Skriv Prometheus-tellere til stderr etter batchen
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let packages = match &cli.input {
        Some(path) => load_packages(path).with_context(|| format!("reading {}", path.display()))?,
        None => demo_packages(),
    };

    let policy = if cli.fail_fast { ErrorPolicy::Halt } else { ErrorPolicy::Skip };
    let metrics = Metrics::new().context("registering counters")?;
    let outcome = run_batch(&packages, policy, &metrics);

    let format = if cli.json { OutputFormat::JsonLines } else { OutputFormat::Text };
    write_outcome(&outcome, format, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
        .context("writing report")?;

    if cli.metrics {
        eprint!("{}", metrics.gather_text().context("encoding counters")?);
    }

    if !outcome.is_success() {
        anyhow::bail!("batch halted after first failing package");
    }
    Ok(())
}
