//! Daily step summary for `<steps>,<duration>` records.
//!
//! Unlabelled records go through [`compute`], which treats them as walking
//! with a fixed step length.

use crate::error::Result;
use crate::metrics::compute;
use crate::parser::parse_record;
use crate::{BodyParameters, DaySummary, RecordLayout};

/// Parse a steps-only record and compute the daily summary
pub fn day_summary(raw: &str, body: &BodyParameters) -> Result<DaySummary> {
    let record = parse_record(raw, RecordLayout::StepsOnly)?;
    let report = compute(&record, body)?;

    Ok(DaySummary {
        steps: record.steps(),
        distance_km: report.distance_km,
        calories: report.calories,
    })
}

/// Rendered daily summary, or an empty string if the record is rejected.
///
/// The failure reason is only visible in the log.
pub fn day_action_info(raw: &str, body: &BodyParameters) -> String {
    match day_summary(raw, body) {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            tracing::warn!("Discarding daily step record {:?}: {}", raw, e);
            String::new()
        }
    }
}
