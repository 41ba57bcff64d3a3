//! Error types for boundary validation.
//!
//! The solar engine itself is total; these errors come from validating
//! caller-supplied latitudes, regions and configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("unknown region '{name}' (expected north, center or south)")]
    UnknownRegion { name: String },

    #[error(
        "invalid quality thresholds: excellent below {excellent_below}°, okay below {okay_below}° \
         (need 0 <= excellent <= okay <= 90)"
    )]
    InvalidThresholds {
        excellent_below: f64,
        okay_below: f64,
    },

    #[error("invalid sample interval {minutes} min (must be between 1 and 1440)")]
    InvalidSampleInterval { minutes: i64 },

    #[error("at most {max} days can be compared, got {requested}")]
    TooManyComparisonDays { requested: usize, max: usize },

    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
}
