pub mod analyzer;
pub mod cli;
pub mod counters;
pub mod dispatch;
pub mod error;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod summary;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use analyzer::derive_metrics;
pub use cli::{process_package, run_batch, write_outcome, BatchOutcome, ErrorPolicy, OutputFormat};
pub use counters::Metrics;
pub use dispatch::{build_sample, read_package};
pub use error::{Result, WorkoutError};
pub use models::{WorkoutKind, WorkoutSample};
pub use storage::{demo_packages, load_packages, parse_packages};
pub use summary::summary_line;
pub use types::{DerivedMetrics, Package};
