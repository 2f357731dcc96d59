pub mod config;
pub mod error;
pub mod loop_name;
pub mod samples;

pub use config::{Config, FetchConfig, IndexConfig, TempoConfig};
pub use error::AppError;
pub use loop_name::{BPM_INCREMENTS, LoopName};
pub use samples::{STROKE_SAMPLES, Sample};
