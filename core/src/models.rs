use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// Treningstype – tre-bokstavs kode fra sensorpakken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [WorkoutKind::Swimming, WorkoutKind::Running, WorkoutKind::Walking];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Navnet som vises i sammendraget.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Antall posisjonelle felt varianten forventer.
    pub fn field_count(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType { code: code.to_string() })
    }
}

/// Rå sensoravlesning, ett sett felt per treningstype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "workout_type")]
pub enum WorkoutSample {
    #[serde(rename = "RUN")]
    Running {
        steps: f64,
        duration_hours: f64,
        weight_kg: f64,
    },
    #[serde(rename = "WLK")]
    Walking {
        steps: f64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    #[serde(rename = "SWM")]
    Swimming {
        strokes: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    },
}

impl WorkoutSample {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutSample::Running { .. } => WorkoutKind::Running,
            WorkoutSample::Walking { .. } => WorkoutKind::Walking,
            WorkoutSample::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match *self {
            WorkoutSample::Running { duration_hours, .. }
            | WorkoutSample::Walking { duration_hours, .. }
            | WorkoutSample::Swimming { duration_hours, .. } => duration_hours,
        }
    }

    /// Steg eller tak (svømming) – enheten distansen regnes ut fra.
    pub fn action_units(&self) -> f64 {
        match *self {
            WorkoutSample::Running { steps, .. } | WorkoutSample::Walking { steps, .. } => steps,
            WorkoutSample::Swimming { strokes, .. } => strokes,
        }
    }
}
