use serde::{Deserialize, Serialize};

/// Avledede nøkkeltall for én økt. Regnes ut én gang, endres ikke etterpå.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub workout_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Én sensorpakke: typekode + posisjonelle råfelt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PackageRepr")]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self { workout_type: workout_type.into(), data }
    }
}

// INPUT-REPR (untagged): PRØV OBJECT FØRST, SÅ LEGACY (TUPLE)
#[derive(Deserialize)]
#[serde(untagged)]
enum PackageRepr {
    Object { workout_type: String, data: Vec<f64> },
    Legacy(String, Vec<f64>),
}

impl From<PackageRepr> for Package {
    fn from(repr: PackageRepr) -> Self {
        match repr {
            PackageRepr::Object { workout_type, data } | PackageRepr::Legacy(workout_type, data) => {
                Package { workout_type, data }
            }
        }
    }
}
