use std::fmt;

use crate::types::DerivedMetrics;

/// Fast format, tre desimaler (fast komma) på alle tallfelt.
impl fmt::Display for DerivedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_label, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

/// Sammendragslinje for én økt.
pub fn summary_line(metrics: &DerivedMetrics) -> String {
    metrics.to_string()
}
