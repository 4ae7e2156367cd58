//! Distance, speed and calorie calculations.
//!
//! Formulas:
//! - Distance: steps × stride length / 1000 (km)
//! - Mean speed: distance / duration in hours (km/h)
//! - Running calories: weight × speed × minutes / 60
//! - Walking calories: half of the running value

use crate::error::{ComputeError, Result};
use crate::parser::parse_record;
use crate::{ActivityKind, ActivityRecord, BodyParameters, MetricsReport, RecordLayout, Stride};
use std::time::Duration;

/// Average step length in meters when height is not taken into account
pub const STEP_LENGTH_M: f64 = 0.65;
/// Stride length as a fraction of body height
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

impl Stride {
    /// Stride length in meters for the given height
    pub fn length_m(&self, height_m: f64) -> f64 {
        match self {
            Stride::FromHeight => height_m * STEP_LENGTH_COEFFICIENT,
            Stride::Fixed(meters) => *meters,
        }
    }
}

/// Distance in kilometers covered by `steps` strides
pub fn distance(steps: i64, stride_m: f64) -> f64 {
    steps as f64 * stride_m / M_IN_KM
}

/// Mean speed in km/h; zero when the duration is not positive
pub fn mean_speed(distance_km: f64, duration_hours: f64) -> f64 {
    if duration_hours <= 0.0 {
        return 0.0;
    }
    distance_km / duration_hours
}

pub fn running_calories(weight_kg: f64, mean_speed_kmh: f64, duration_minutes: f64) -> f64 {
    weight_kg * mean_speed_kmh * duration_minutes / MIN_IN_H
}

pub fn walking_calories(weight_kg: f64, mean_speed_kmh: f64, duration_minutes: f64) -> f64 {
    running_calories(weight_kg, mean_speed_kmh, duration_minutes) * WALKING_CALORIES_COEFFICIENT
}

fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Checks shared by the public calorie entry points.
///
/// These run even for parsed records since the entry points are also called
/// directly with caller-supplied values. Negated comparisons reject NaN too.
fn validate_inputs(
    steps: i64,
    body: &BodyParameters,
    duration: Duration,
    stride: Stride,
) -> std::result::Result<(), ComputeError> {
    if steps <= 0 {
        return Err(ComputeError::InvalidStepCount(steps));
    }
    if !(body.weight_kg > 0.0 && body.height_m > 0.0) {
        return Err(ComputeError::InvalidBodyParameters {
            weight: body.weight_kg,
            height: body.height_m,
        });
    }
    if duration.is_zero() {
        return Err(ComputeError::InvalidDuration);
    }
    let stride_m = stride.length_m(body.height_m);
    if !(stride_m > 0.0 && stride_m.is_finite()) {
        return Err(ComputeError::InvalidStrideLength(stride_m));
    }
    Ok(())
}

fn speed_for(steps: i64, body: &BodyParameters, duration: Duration, stride: Stride) -> f64 {
    let distance_km = distance(steps, stride.length_m(body.height_m));
    mean_speed(distance_km, hours(duration))
}

/// Calories burned walking, after validating every input
pub fn walking_spent_calories(
    steps: i64,
    body: &BodyParameters,
    duration: Duration,
    stride: Stride,
) -> std::result::Result<f64, ComputeError> {
    validate_inputs(steps, body, duration, stride)?;
    let speed = speed_for(steps, body, duration, stride);
    Ok(walking_calories(body.weight_kg, speed, minutes(duration)))
}

/// Calories burned running, after validating every input
pub fn running_spent_calories(
    steps: i64,
    body: &BodyParameters,
    duration: Duration,
    stride: Stride,
) -> std::result::Result<f64, ComputeError> {
    validate_inputs(steps, body, duration, stride)?;
    let speed = speed_for(steps, body, duration, stride);
    Ok(running_calories(body.weight_kg, speed, minutes(duration)))
}

/// Compute the metrics report for a parsed record.
///
/// A labelled record selects its formulas from the label and derives stride
/// length from height. A record without a label is a plain step count: it is
/// treated as walking with the fixed [`STEP_LENGTH_M`] stride.
pub fn compute(
    record: &ActivityRecord,
    body: &BodyParameters,
) -> std::result::Result<MetricsReport, ComputeError> {
    let (kind, stride) = match record.label() {
        Some(label) => (label.parse::<ActivityKind>()?, Stride::FromHeight),
        None => (ActivityKind::Walking, Stride::Fixed(STEP_LENGTH_M)),
    };

    let steps = record.steps();
    let duration = record.duration();

    let calories = match kind {
        ActivityKind::Walking => walking_spent_calories(steps, body, duration, stride)?,
        ActivityKind::Running => running_spent_calories(steps, body, duration, stride)?,
    };

    let distance_km = distance(steps, stride.length_m(body.height_m));
    let duration_hours = hours(duration);

    tracing::debug!(
        "Computed {} metrics: {:.3} km over {:.3} h, {:.2} kcal",
        kind,
        distance_km,
        duration_hours,
        calories
    );

    Ok(MetricsReport {
        label: record.label().map(str::to_string),
        kind,
        duration_hours,
        distance_km,
        mean_speed_kmh: mean_speed(distance_km, duration_hours),
        calories,
    })
}

/// Parse a `<steps>,<label>,<duration>` record and compute its metrics
pub fn training_info(raw: &str, body: &BodyParameters) -> Result<MetricsReport> {
    let record = parse_record(raw, RecordLayout::Training)?;
    Ok(compute(&record, body)?)
}

/// Rendered training report for a raw record
pub fn training_report(raw: &str, body: &BodyParameters) -> Result<String> {
    Ok(training_info(raw, body)?.to_string())
}
