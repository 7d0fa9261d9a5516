use crate::error::{Result, WorkoutError};
use crate::models::{WorkoutKind, WorkoutSample};

// Feltnavn i fast posisjonsrekkefølge per type
const RUN_FIELDS: [&str; 3] = ["steps", "duration_hours", "weight_kg"];
const WLK_FIELDS: [&str; 4] = ["steps", "duration_hours", "weight_kg", "height_cm"];
const SWM_FIELDS: [&str; 5] = ["strokes", "duration_hours", "weight_kg", "pool_length_m", "pool_laps"];

fn field_names(kind: WorkoutKind) -> &'static [&'static str] {
    match kind {
        WorkoutKind::Running => &RUN_FIELDS,
        WorkoutKind::Walking => &WLK_FIELDS,
        WorkoutKind::Swimming => &SWM_FIELDS,
    }
}

/// Endelig og ikke-negativ. Tellefelt (steg/tak/runder) kan også være desimaltall.
fn measure(value: f64, field: &'static str) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidField { field, value })
    }
}

/// Bygg en [`WorkoutSample`] fra en ferdig tolket type + råfelt.
pub fn build_sample(kind: WorkoutKind, data: &[f64]) -> Result<WorkoutSample> {
    let names = field_names(kind);
    if data.len() != names.len() {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected: kind.field_count(),
            got: data.len(),
        });
    }

    let sample = match kind {
        WorkoutKind::Running => WorkoutSample::Running {
            steps: measure(data[0], names[0])?,
            duration_hours: measure(data[1], names[1])?,
            weight_kg: measure(data[2], names[2])?,
        },
        WorkoutKind::Walking => WorkoutSample::Walking {
            steps: measure(data[0], names[0])?,
            duration_hours: measure(data[1], names[1])?,
            weight_kg: measure(data[2], names[2])?,
            height_cm: measure(data[3], names[3])?,
        },
        WorkoutKind::Swimming => WorkoutSample::Swimming {
            strokes: measure(data[0], names[0])?,
            duration_hours: measure(data[1], names[1])?,
            weight_kg: measure(data[2], names[2])?,
            pool_length_m: measure(data[3], names[3])?,
            pool_laps: measure(data[4], names[4])?,
        },
    };
    Ok(sample)
}

/// Les en sensorpakke: kode ("SWM" | "RUN" | "WLK") + posisjonelle felt.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<WorkoutSample> {
    let kind: WorkoutKind = workout_type.parse()?;
    build_sample(kind, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_fields_in_order() {
        let s = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            s,
            WorkoutSample::Swimming {
                strokes: 720.0,
                duration_hours: 1.0,
                weight_kg: 80.0,
                pool_length_m: 25.0,
                pool_laps: 40.0,
            }
        );
    }

    #[test]
    fn wrong_arity_reports_expected_and_got() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        match err {
            WorkoutError::ArityMismatch { kind, expected, got } => {
                assert_eq!(kind, WorkoutKind::Walking);
                assert_eq!(expected, 4);
                assert_eq!(got, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_code_wins_over_arity() {
        assert!(matches!(
            read_package("XYZ", &[]),
            Err(WorkoutError::UnknownWorkoutType { .. })
        ));
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidField { field: "steps", .. })
        ));
        assert!(matches!(
            read_package("RUN", &[100.0, f64::NAN, 75.0]),
            Err(WorkoutError::InvalidField { field: "duration_hours", .. })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, f64::INFINITY, 40.0]),
            Err(WorkoutError::InvalidField { field: "pool_length_m", .. })
        ));
    }

    #[test]
    fn fractional_and_large_counts_are_accepted() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap();
        let m = crate::analyzer::derive_metrics(&swim).unwrap();
        assert!((m.mean_speed_kmh - 1.0125).abs() < 1e-9);

        let run = read_package("RUN", &[15000.5, 1.0, 75.0]).unwrap();
        assert_eq!(run.action_units(), 15000.5);

        // over u32::MAX
        let run = read_package("RUN", &[5e9, 1.0, 75.0]).unwrap();
        let m = crate::analyzer::derive_metrics(&run).unwrap();
        assert!((m.distance_km - 3_250_000.0).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_is_accepted_here() {
        // deling på null oppdages først i analyzer
        assert!(read_package("RUN", &[100.0, 0.0, 75.0]).is_ok());
    }
}
