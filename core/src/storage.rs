use std::path::Path;

use log::info;

use crate::error::{Result, WorkoutError};
use crate::types::Package;

/// Dekoder en batch fra JSON. Feil peker på stien i dokumentet (f.eks. `[1].data[2]`).
pub fn parse_packages(json: &str) -> Result<Vec<Package>> {
    let mut de = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut de).map_err(|e| WorkoutError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Leser inn en batch med sensorpakker fra disk (JSON).
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let packages = parse_packages(&contents)?;
    info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Demodata: én økt av hver type.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
