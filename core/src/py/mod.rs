// Python-bindinger (maturin develop --features python)
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::cli::process_package;
use crate::error::WorkoutError;
use crate::types::Package;

fn to_py_err(e: WorkoutError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// read_package_summary("RUN", [15000, 1, 75]) -> "Workout type: Running; ..."
#[pyfunction]
fn read_package_summary(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let (_, metrics) = process_package(&Package::new(workout_type, data)).map_err(to_py_err)?;
    Ok(metrics.to_string())
}

/// Samme beregning, returnert som JSON-objekt (str).
#[pyfunction]
fn derive_metrics_json(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let (_, metrics) = process_package(&Package::new(workout_type, data)).map_err(to_py_err)?;
    serde_json::to_string(&metrics).map_err(|e| PyValueError::new_err(e.to_string()))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_summary, m)?)?;
    m.add_function(wrap_pyfunction!(derive_metrics_json, m)?)?;
    Ok(())
}
