#![forbid(unsafe_code)]

//! Core domain model and calculations for the step tracker.
//!
//! This crate provides:
//! - Domain types (activity kinds, records, body parameters, reports)
//! - Record and duration parsing
//! - Distance, speed and calorie formulas
//! - Training and daily step reports
//! - Settings and logging setup shared with the CLI

pub mod types;
pub mod error;
pub mod duration;
pub mod parser;
pub mod metrics;
pub mod daysteps;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{ComputeError, DurationError, Error, ParseError, Result};
pub use types::*;
pub use config::Settings;
pub use duration::parse_duration;
pub use parser::parse_record;
pub use metrics::{
    compute, running_spent_calories, training_info, training_report, walking_spent_calories,
};
pub use daysteps::{day_action_info, day_summary};
