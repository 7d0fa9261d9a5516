// core/src/error.rs
use thiserror::Error;

use crate::models::WorkoutKind;

/// Alle feil en enkelt treningsøkt (eller en batch-fil) kan gi.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown workout type code: {code:?}")]
    UnknownWorkoutType { code: String },

    #[error("{kind} expects {expected} fields, got {got}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("division by zero: {field} is 0")]
    DivisionByZero { field: &'static str },

    #[error("invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },

    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WorkoutError {
    /// Kort, stabil nøkkel (snake_case) – brukes som label i Prometheus.
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType { .. } => "unknown_workout_type",
            WorkoutError::ArityMismatch { .. } => "arity_mismatch",
            WorkoutError::DivisionByZero { .. } => "division_by_zero",
            WorkoutError::InvalidField { .. } => "invalid_field",
            WorkoutError::Parse { .. } => "parse",
            WorkoutError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
