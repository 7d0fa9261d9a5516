// core/src/counters.rs
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::WorkoutError;
use crate::models::WorkoutKind;

/// Prometheus-tellere for batch-kjøringer. Eget register per instans.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    processed: IntCounterVec,
    failed: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let processed = IntCounterVec::new(
            Opts::new("workouts_processed_total", "Workouts successfully summarized"),
            &["workout_type"],
        )?;
        let failed = IntCounterVec::new(
            Opts::new("workouts_failed_total", "Workouts rejected, by error kind"),
            &["reason"],
        )?;

        registry.register(Box::new(processed.clone()))?;
        registry.register(Box::new(failed.clone()))?;

        Ok(Self { registry, processed, failed })
    }

    pub fn record_processed(&self, kind: WorkoutKind) {
        self.processed.with_label_values(&[kind.code()]).inc();
    }

    pub fn record_failed(&self, err: &WorkoutError) {
        self.failed.with_label_values(&[err.reason()]).inc();
    }

    pub fn processed_count(&self, kind: WorkoutKind) -> u64 {
        self.processed.with_label_values(&[kind.code()]).get()
    }

    pub fn failed_count(&self, reason: &str) -> u64 {
        self.failed.with_label_values(&[reason]).get()
    }

    /// Tekstformat (exposition) for alle tellere i registeret.
    pub fn gather_text(&self) -> prometheus::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
