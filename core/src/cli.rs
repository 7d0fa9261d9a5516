use std::io::Write;

use log::{info, warn};

use crate::analyzer::derive_metrics;
use crate::counters::Metrics;
use crate::dispatch::read_package;
use crate::error::{Result, WorkoutError};
use crate::models::WorkoutKind;
use crate::types::{DerivedMetrics, Package};

/// Hva som skjer når én pakke feiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Rapporter og fortsett med resten av batchen.
    #[default]
    Skip,
    /// Stopp ved første feil.
    Halt,
}

/// Utformat for vellykkede pakker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    JsonLines,
}

/// Resultat per pakke, i input-rekkefølge. Feil bærer indeksen til pakken.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub lines: Vec<std::result::Result<DerivedMetrics, (usize, WorkoutError)>>,
    /// Antall pakker i input-batchen.
    pub total: usize,
    pub policy: ErrorPolicy,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> impl Iterator<Item = &DerivedMetrics> {
        self.lines.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &(usize, WorkoutError)> {
        self.lines.iter().filter_map(|r| r.as_ref().err())
    }

    /// Stoppet batchen før alle pakker var behandlet?
    pub fn halted(&self) -> bool {
        self.lines.len() < self.total
    }

    /// Skip tåler feil; Halt feiler hvis noen pakke feilet.
    pub fn is_success(&self) -> bool {
        self.policy == ErrorPolicy::Skip || self.failed().next().is_none()
    }
}

/// Dispatch + beregning for én pakke. Typen kommer fra dispatch, ikke fra ny parsing.
pub fn process_package(package: &Package) -> Result<(WorkoutKind, DerivedMetrics)> {
    let sample = read_package(&package.workout_type, &package.data)?;
    Ok((sample.kind(), derive_metrics(&sample)?))
}

pub fn run_batch(packages: &[Package], policy: ErrorPolicy, metrics: &Metrics) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        lines: Vec::with_capacity(packages.len()),
        total: packages.len(),
        policy,
    };

    for (idx, package) in packages.iter().enumerate() {
        match process_package(package) {
            Ok((kind, m)) => {
                metrics.record_processed(kind);
                outcome.lines.push(Ok(m));
            }
            Err(e) => {
                warn!("package #{idx} ({}) skipped: {e}", package.workout_type);
                metrics.record_failed(&e);
                outcome.lines.push(Err((idx, e)));
                if policy == ErrorPolicy::Halt {
                    break;
                }
            }
        }
    }

    info!(
        "batch done: {} ok, {} failed, {} total",
        outcome.succeeded().count(),
        outcome.failed().count(),
        outcome.total
    );
    outcome
}

/// Skriver resultatet i input-rekkefølge: nøkkeltall til `out`, feil til `err`.
pub fn write_outcome(
    outcome: &BatchOutcome,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    for line in &outcome.lines {
        match (line, format) {
            (Ok(m), OutputFormat::Text) => writeln!(out, "{m}")?,
            (Ok(m), OutputFormat::JsonLines) => {
                serde_json::to_writer(&mut *out, m)?;
                writeln!(out)?;
            }
            (Err((idx, e)), _) => writeln!(err, "package #{idx}: {e}")?,
        }
    }
    Ok(())
}
