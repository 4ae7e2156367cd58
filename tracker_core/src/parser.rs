//! Parsing of raw comma-separated activity records.
//!
//! Records are split on `,` with no trimming or escaping:
//! - `<steps>,<duration>` for daily step counts
//! - `<steps>,<label>,<duration>` for training sessions

use crate::duration::parse_duration;
use crate::error::{DurationError, ParseError};
use crate::{ActivityRecord, RecordLayout};

const DELIMITER: char = ',';

/// Parse and validate a raw record with the given field layout.
///
/// The label of a training record is kept verbatim; recognising it is left to
/// the metrics stage.
pub fn parse_record(raw: &str, layout: RecordLayout) -> Result<ActivityRecord, ParseError> {
    let fields: Vec<&str> = raw.split(DELIMITER).collect();

    let expected = layout.field_count();
    if fields.len() != expected {
        tracing::debug!(
            "Rejecting record {:?}: expected {} fields, got {}",
            raw,
            expected,
            fields.len()
        );
        return Err(ParseError::WrongFieldCount {
            expected,
            found: fields.len(),
        });
    }

    let steps = parse_steps(fields[0])?;

    let label = match layout {
        RecordLayout::Training => Some(fields[1].to_string()),
        RecordLayout::StepsOnly => None,
    };

    let duration = parse_positive_duration(fields[expected - 1])?;

    ActivityRecord::new(steps, label, duration)
}

fn parse_steps(field: &str) -> Result<i64, ParseError> {
    match field.parse::<i64>() {
        Ok(steps) if steps > 0 => Ok(steps),
        Ok(steps) => {
            tracing::debug!("Rejecting non-positive step count {}", steps);
            Err(ParseError::InvalidStepCount(field.to_string()))
        }
        Err(e) => {
            tracing::debug!("Rejecting step count {:?}: {}", field, e);
            Err(ParseError::InvalidStepCount(field.to_string()))
        }
    }
}

fn parse_positive_duration(field: &str) -> Result<std::time::Duration, ParseError> {
    let invalid = |source: DurationError| {
        tracing::debug!("Rejecting duration {:?}: {}", field, source);
        ParseError::InvalidDuration {
            input: field.to_string(),
            source,
        }
    };

    let delta = parse_duration(field).map_err(invalid)?;
    if delta <= chrono::TimeDelta::zero() {
        return Err(invalid(DurationError::NonPositive));
    }

    delta.to_std().map_err(|_| invalid(DurationError::NonPositive))
}
