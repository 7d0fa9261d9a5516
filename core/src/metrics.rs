// core/src/metrics.rs
use crate::error::{Result, WorkoutError};

pub const M_IN_KM: f64 = 1000.0;     // meter per km
pub const MIN_IN_H: f64 = 60.0;      // minutter per time
pub const LEN_STEP_M: f64 = 0.65;    // steglengde løping/gange (m)
pub const LEN_STROKE_M: f64 = 1.38;  // lengde per svømmetak (m)

pub const RUN_CAL_MULT: f64 = 18.0;
pub const RUN_CAL_INCR: f64 = 20.0;
pub const WALK_CAL_WEIGHT_MULT: f64 = 0.035;
pub const WALK_CAL_SPEED_MULT: f64 = 0.029;
pub const SWIM_CAL_INCR: f64 = 1.1;
pub const SWIM_CAL_MULT: f64 = 2.0;

#[inline]
fn nonzero(value: f64, field: &'static str) -> Result<f64> {
    if value == 0.0 {
        Err(WorkoutError::DivisionByZero { field })
    } else {
        Ok(value)
    }
}

/// Distanse (km) = enheter * lengde per enhet / 1000
pub fn distance_km(units: f64, step_length_m: f64) -> f64 {
    units * step_length_m / M_IN_KM
}

/// Snittfart (km/t) = distanse / varighet
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> Result<f64> {
    Ok(distance_km / nonzero(duration_hours, "duration_hours")?)
}

/// Svømming: farten regnes fra bassenggeometri, ikke fra antall tak.
pub fn swimming_mean_speed_kmh(pool_length_m: f64, laps: f64, duration_hours: f64) -> Result<f64> {
    Ok(pool_length_m * laps / M_IN_KM / nonzero(duration_hours, "duration_hours")?)
}

/// (18 * v - 20) * vekt / 1000 * t * 60
pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (RUN_CAL_MULT * mean_speed_kmh - RUN_CAL_INCR) * weight_kg / M_IN_KM * duration_hours * MIN_IN_H
}

/// (0.035 * vekt + floor(v² / høyde) * 0.029 * vekt) * t * 60
///
/// NB: v² / høyde avrundes NED til heltall før multiplikasjon. Ser ut som
/// en feil i formelen, men beholdes til domeneeier har bekreftet.
pub fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> Result<f64> {
    let ratio = (mean_speed_kmh.powi(2) / nonzero(height_cm, "height_cm")?).floor();
    Ok((WALK_CAL_WEIGHT_MULT * weight_kg + ratio * WALK_CAL_SPEED_MULT * weight_kg)
        * duration_hours
        * MIN_IN_H)
}

/// (v + 1.1) * 2 * vekt
pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + SWIM_CAL_INCR) * SWIM_CAL_MULT * weight_kg
}
