use std::time::Duration;

use crate::processing::types::{Activity, RecordError, TrainingRecord, WalkRecord};

/// Split a daily walk packet `"<steps>,<duration>"` into validated fields.
///
/// A zero-length duration is accepted here; the speed calculation guards the
/// division on its own.
pub fn parse_walk_record(data: &str) -> Result<WalkRecord, RecordError> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != 2 {
        return Err(RecordError::InvalidFormat {
            expected: 2,
            found: parts.len(),
        });
    }

    let steps = parse_steps(parts[0])?;
    let duration = parse_duration(parts[1])?;

    Ok(WalkRecord { steps, duration })
}

/// Split a training packet `"<steps>,<activity>,<duration>"` into validated
/// fields.
///
/// The duration must be strictly positive. All fields are validated before
/// the activity label is resolved, so a malformed packet is reported as such
/// even when the label is also unrecognized.
pub fn parse_training_record(data: &str) -> Result<TrainingRecord, RecordError> {
    let parts: Vec<&str> = data.split(',').collect();
    if parts.len() != 3 {
        return Err(RecordError::InvalidFormat {
            expected: 3,
            found: parts.len(),
        });
    }

    let steps = parse_steps(parts[0])?;
    let label = parts[1].trim();
    let duration = parse_duration(parts[2])?;
    if duration.is_zero() {
        return Err(RecordError::NonPositiveDuration);
    }

    let activity = Activity::from_label(label)
        .ok_or_else(|| RecordError::UnknownActivity(label.to_string()))?;

    Ok(TrainingRecord {
        steps,
        activity,
        duration,
    })
}

fn parse_steps(field: &str) -> Result<u32, RecordError> {
    let raw = field.trim();
    raw.parse::<i64>()
        .ok()
        .filter(|steps| *steps > 0)
        .and_then(|steps| u32::try_from(steps).ok())
        .ok_or_else(|| RecordError::InvalidSteps(raw.to_string()))
}

/// Parse a human-readable duration such as `"45m"`, `"1h30m"`, or
/// `"1h 30m 15s"`.
///
/// Each group is a decimal number followed by a unit (`h`, `m`, `s`, `ms`);
/// groups may be concatenated or separated by whitespace. The grammar has no
/// sign, so a negative span never parses.
pub fn parse_duration(raw: &str) -> Result<Duration, RecordError> {
    let text = raw.trim();
    let invalid = || RecordError::InvalidDuration(text.to_string());

    if text.is_empty() {
        return Err(invalid());
    }

    let mut total_secs = 0.0_f64;
    let mut rest = text;
    while !rest.is_empty() {
        // A trailing bare number has no unit to stop at.
        let number_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(invalid)?;
        if number_end == 0 {
            return Err(invalid());
        }

        let (number, tail) = rest.split_at(number_end);
        let value = number.parse::<f64>().map_err(|_| invalid())?;

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, remainder) = tail.split_at(unit_end);
        let scale = unit_in_seconds(unit.trim()).ok_or_else(invalid)?;

        total_secs += value * scale;
        rest = remainder;
    }

    Duration::try_from_secs_f64(total_secs).map_err(|_| invalid())
}

fn unit_in_seconds(unit: &str) -> Option<f64> {
    match unit {
        "h" => Some(3600.0),
        "m" => Some(60.0),
        "s" => Some(1.0),
        "ms" => Some(0.001),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_and_compound_durations() {
        assert_eq!(parse_duration("45m").unwrap(), Duration::from_secs(2700));
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(
            parse_duration("1h 30m 15s").unwrap(),
            Duration::from_secs(5415)
        );
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("0m").unwrap(), Duration::ZERO);
    }

    #[test]
    fn rejects_malformed_durations() {
        for raw in ["", "abc", "10", "h", "10x", "1..5h", "-30m", "1h30"] {
            assert!(parse_duration(raw).is_err(), "{raw:?} should fail");
        }
    }

    #[test]
    fn walk_record_trims_fields() {
        let record = parse_walk_record(" 5000 , 1h ").unwrap();
        assert_eq!(record.steps, 5000);
        assert_eq!(record.duration, Duration::from_secs(3600));
    }

    #[test]
    fn field_count_is_enforced() {
        assert!(matches!(
            parse_walk_record("5000"),
            Err(RecordError::InvalidFormat {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            parse_walk_record("5000,1h,extra"),
            Err(RecordError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_training_record("5000,1h"),
            Err(RecordError::InvalidFormat {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn non_positive_steps_are_rejected() {
        for raw in ["0,1h", "-5,1h", "abc,1h", ",1h"] {
            assert!(matches!(
                parse_walk_record(raw),
                Err(RecordError::InvalidSteps(_))
            ));
        }
    }

    #[test]
    fn training_record_resolves_activity() {
        let record = parse_training_record("5000,Бег,30m").unwrap();
        assert_eq!(record.activity, Activity::Running);
        assert_eq!(record.duration, Duration::from_secs(1800));
    }

    #[test]
    fn zero_training_duration_is_rejected() {
        assert!(matches!(
            parse_training_record("5000,Бег,0m"),
            Err(RecordError::NonPositiveDuration)
        ));
    }

    #[test]
    fn unknown_label_is_reported_after_field_validation() {
        assert!(matches!(
            parse_training_record("5000,Плавание,1h"),
            Err(RecordError::UnknownActivity(label)) if label == "Плавание"
        ));
        // A malformed duration wins over an unrecognized label.
        assert!(matches!(
            parse_training_record("5000,Плавание,0m"),
            Err(RecordError::NonPositiveDuration)
        ));
    }
}
