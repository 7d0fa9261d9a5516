use log::debug;

use crate::error::Result;
use crate::metrics::{
    distance_km, mean_speed_kmh, running_calories, swimming_calories, swimming_mean_speed_kmh,
    walking_calories, LEN_STEP_M, LEN_STROKE_M,
};
use crate::models::WorkoutSample;
use crate::types::DerivedMetrics;

/// Én ren beregning: råprøve → distanse, snittfart og kalorier.
pub fn derive_metrics(sample: &WorkoutSample) -> Result<DerivedMetrics> {
    let duration = sample.duration_hours();

    let (distance, speed, calories) = match *sample {
        WorkoutSample::Running { steps, weight_kg, .. } => {
            let d = distance_km(steps, LEN_STEP_M);
            let v = mean_speed_kmh(d, duration)?;
            (d, v, running_calories(v, weight_kg, duration))
        }
        WorkoutSample::Walking { steps, weight_kg, height_cm, .. } => {
            let d = distance_km(steps, LEN_STEP_M);
            let v = mean_speed_kmh(d, duration)?;
            (d, v, walking_calories(v, weight_kg, height_cm, duration)?)
        }
        WorkoutSample::Swimming { strokes, weight_kg, pool_length_m, pool_laps, .. } => {
            // distanse fra antall tak, fart fra bassenglengde * runder
            let d = distance_km(strokes, LEN_STROKE_M);
            let v = swimming_mean_speed_kmh(pool_length_m, pool_laps, duration)?;
            (d, v, swimming_calories(v, weight_kg))
        }
    };

    let kind = sample.kind();
    debug!(
        "{}: distance={:.3} km speed={:.3} km/h calories={:.3}",
        kind, distance, speed, calories
    );

    Ok(DerivedMetrics {
        workout_label: kind.label().to_string(),
        duration_hours: duration,
        distance_km: distance,
        mean_speed_kmh: speed,
        calories_kcal: calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkoutError;

    #[test]
    fn swimming_distance_comes_from_strokes() {
        let s = WorkoutSample::Swimming {
            strokes: 720.0,
            duration_hours: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40.0,
        };
        let m = derive_metrics(&s).unwrap();
        assert_eq!(m.workout_label, "Swimming");
        assert!((m.distance_km - 0.9936).abs() < 1e-9);
        assert!((m.mean_speed_kmh - 1.0).abs() < 1e-9);
        assert!((m.calories_kcal - 336.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_fails_for_every_kind() {
        let samples = [
            WorkoutSample::Running { steps: 1.0, duration_hours: 0.0, weight_kg: 70.0 },
            WorkoutSample::Walking { steps: 1.0, duration_hours: 0.0, weight_kg: 70.0, height_cm: 170.0 },
            WorkoutSample::Swimming {
                strokes: 1.0,
                duration_hours: 0.0,
                weight_kg: 70.0,
                pool_length_m: 25.0,
                pool_laps: 1.0,
            },
        ];
        for s in &samples {
            assert!(matches!(
                derive_metrics(s),
                Err(WorkoutError::DivisionByZero { field: "duration_hours" })
            ));
        }
    }
}
