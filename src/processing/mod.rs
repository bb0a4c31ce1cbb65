//! Parsing and metric derivation for step-tracker packets.
//!
//! Two packet shapes arrive from the tracker as comma-delimited text:
//!
//! * A daily walk packet, `"<steps>,<duration>"`, summarized as step count,
//!   distance, and calories.
//! * A training packet, `"<steps>,<activity>,<duration>"`, summarized as
//!   activity kind, duration in hours, distance, mean speed, and calories.
//!
//! The functions in this module are pure: they hold no state across calls and
//! perform no I/O. Callers that need explicit errors use [`walk_summary`] and
//! [`training_summary`]; [`day_action_info`] and [`training_info`] keep the
//! legacy string-in/string-out shape on top of them.

pub mod display;
pub mod parse;
pub mod summary;
pub mod types;

use display::{render_training_report, render_walk_report};
use parse::{parse_training_record, parse_walk_record};
use summary::{derive_training_summary, derive_walk_summary};

pub use display::UNKNOWN_TRAINING_MESSAGE;
pub use summary::STEP_LENGTH_METERS;
pub use types::{Activity, RecordError, TrainingRecord, TrainingSummary, WalkRecord, WalkSummary};

/// Parse a training packet and derive its metrics.
///
/// The function performs three stages:
/// 1. [`parse::parse_training_record`] validates the field count, step count,
///    duration, and activity label.
/// 2. [`summary::derive_training_summary`] computes distance, mean speed, and
///    the activity-specific calorie figure.
/// 3. The assembled [`TrainingSummary`] is returned for rendering.
pub fn training_summary(
    data: &str,
    weight: f64,
    height: f64,
) -> Result<TrainingSummary, RecordError> {
    let record = parse_training_record(data)?;
    Ok(derive_training_summary(&record, weight, height))
}

/// Parse a daily walk packet and derive its metrics.
pub fn walk_summary(data: &str, weight: f64, height: f64) -> Result<WalkSummary, RecordError> {
    let record = parse_walk_record(data)?;
    Ok(derive_walk_summary(&record, weight, height))
}

/// Report on a training packet.
///
/// Always returns displayable text: the report on success, the fixed
/// unknown-type message for an unrecognized activity, and an inline
/// `Error: ...` line for any other failure.
pub fn training_info(data: &str, weight: f64, height: f64) -> String {
    match training_summary(data, weight, height) {
        Ok(summary) => render_training_report(&summary),
        Err(RecordError::UnknownActivity(_)) => UNKNOWN_TRAINING_MESSAGE.to_string(),
        Err(err) => format!("Error: {err}"),
    }
}

/// Report on a daily walk packet.
///
/// A malformed packet is logged and degrades to an empty string; callers must
/// treat emptiness as "no computation performed".
pub fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    match walk_summary(data, weight, height) {
        Ok(summary) => render_walk_report(&summary),
        Err(err) => {
            tracing::error!("invalid walk packet {data:?}: {err}");
            String::new()
        }
    }
}
