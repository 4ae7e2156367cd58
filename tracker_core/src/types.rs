//! Core domain types for the step tracker.
//!
//! This module defines:
//! - Activity kinds and their textual labels
//! - Validated activity records
//! - Body parameters supplied per call
//! - Computed reports for training and daily step records

use crate::error::{ComputeError, DurationError, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Activity Types
// ============================================================================

/// Kind of activity a record describes
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// Canonical English label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = ComputeError;

    /// Exact, case-sensitive match against the known labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Walking" | "Ходьба" => Ok(ActivityKind::Walking),
            "Running" | "Бег" => Ok(ActivityKind::Running),
            other => Err(ComputeError::UnknownActivityType(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Record Types
// ============================================================================

/// Field layout of a raw record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordLayout {
    /// `<steps>,<duration>`
    StepsOnly,
    /// `<steps>,<label>,<duration>`
    Training,
}

impl RecordLayout {
    /// Number of comma-separated fields this layout expects
    pub fn field_count(&self) -> usize {
        match self {
            RecordLayout::StepsOnly => 2,
            RecordLayout::Training => 3,
        }
    }
}

/// A validated activity record.
///
/// Step count and duration are always positive; a record that would violate
/// this is never constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRecord {
    steps: i64,
    label: Option<String>,
    duration: Duration,
}

impl ActivityRecord {
    /// Build a record from already-split values
    pub fn new(
        steps: i64,
        label: Option<String>,
        duration: Duration,
    ) -> Result<Self, ParseError> {
        if steps <= 0 {
            return Err(ParseError::InvalidStepCount(steps.to_string()));
        }
        if duration.is_zero() {
            return Err(ParseError::InvalidDuration {
                input: format!("{:?}", duration),
                source: DurationError::NonPositive,
            });
        }
        Ok(Self {
            steps,
            label,
            duration,
        })
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// Activity label as it appeared in the raw record
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Weight (kilograms) and height (meters) of the person being tracked
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BodyParameters {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl BodyParameters {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }
}

/// How the length of a single step is obtained
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stride {
    /// Derived from body height
    FromHeight,
    /// Fixed length in meters
    Fixed(f64),
}

// ============================================================================
// Report Types
// ============================================================================

/// Metrics computed for an activity record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricsReport {
    /// Label exactly as it appeared in the record; absent for step counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub kind: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            writeln!(f, "Тип тренировки: {}", label)?;
        }
        writeln!(f, "Длительность: {:.2} ч.", self.duration_hours)?;
        writeln!(f, "Дистанция: {:.2} км.", self.distance_km)?;
        writeln!(f, "Скорость: {:.2} км/ч", self.mean_speed_kmh)?;
        writeln!(f, "Сожгли калорий: {:.2}", self.calories)
    }
}

/// Daily walking summary computed from a steps-only record
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Количество шагов: {}.", self.steps)?;
        writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
        writeln!(f, "Вы сожгли {:.2} ккал.", self.calories)
    }
}
