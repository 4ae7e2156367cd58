//! Error types for the tracker_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raw record could not be turned into an activity record
    #[error("Record error: {0}")]
    Parse(#[from] ParseError),

    /// Metrics could not be computed for a valid record
    #[error("Metrics error: {0}")]
    Compute(#[from] ComputeError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure to read a duration expression such as `1h30m`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} out of range")]
    Overflow(String),

    #[error("duration must be positive")]
    NonPositive,
}

/// Rejection of a raw activity record
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected} fields, got {found}")]
    WrongFieldCount { expected: usize, found: usize },

    /// Step field is not an integer or is not positive
    #[error("invalid step count {0:?}")]
    InvalidStepCount(String),

    /// Duration field is unparseable or not positive
    #[error("invalid duration {input:?}: {source}")]
    InvalidDuration {
        input: String,
        #[source]
        source: DurationError,
    },
}

/// Rejection raised while computing metrics
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputeError {
    #[error("step count must be positive, got {0}")]
    InvalidStepCount(i64),

    #[error("weight and height must be positive (weight {weight}, height {height})")]
    InvalidBodyParameters { weight: f64, height: f64 },

    #[error("duration must be positive")]
    InvalidDuration,

    #[error("stride length must be positive, got {0}")]
    InvalidStrideLength(f64),

    #[error("unknown activity type {0:?}")]
    UnknownActivityType(String),
}
