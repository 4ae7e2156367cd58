//! Duration expressions such as `45m`, `1h30m` or `2h 5m 10s`.
//!
//! An optional sign is followed by one or more `<integer><unit>` pairs,
//! read by `humantime` (`ns`, `us`, `ms`, `s`, `m`, `h` and their long
//! forms such as `min` or `hours`). The bare string `0` is accepted as zero.
//!
//! The result is signed; callers decide whether zero or negative spans are
//! acceptable.

use crate::error::DurationError;
use chrono::TimeDelta;

/// Parse a duration expression into a signed [`TimeDelta`].
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let (negative, magnitude) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if magnitude == "0" {
        return Ok(TimeDelta::zero());
    }
    if magnitude.is_empty() {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let span = humantime::parse_duration(magnitude).map_err(|e| map_error(e, input))?;

    // Keep spans representable as i64 nanoseconds
    if span.as_nanos() > i64::MAX as u128 {
        return Err(DurationError::Overflow(input.to_string()));
    }
    let delta =
        TimeDelta::from_std(span).map_err(|_| DurationError::Overflow(input.to_string()))?;

    Ok(if negative { -delta } else { delta })
}

fn map_error(error: humantime::DurationError, input: &str) -> DurationError {
    match error {
        humantime::DurationError::Empty => DurationError::Empty,
        humantime::DurationError::UnknownUnit { unit, .. } if unit.is_empty() => {
            DurationError::MissingUnit(input.to_string())
        }
        humantime::DurationError::UnknownUnit { unit, .. } => DurationError::UnknownUnit {
            unit,
            input: input.to_string(),
        },
        humantime::DurationError::NumberOverflow => DurationError::Overflow(input.to_string()),
        // Stray characters or a unit with no number in front of it
        _ => DurationError::Invalid(input.to_string()),
    }
}
