use std::time::Duration;

use crate::processing::types::{
    Activity, TrainingRecord, TrainingSummary, WalkRecord, WalkSummary,
};

/// Average stride length in meters used to convert steps to distance.
pub const STEP_LENGTH_METERS: f64 = 0.65;

const METERS_IN_KM: f64 = 1000.0;
const MINUTES_IN_HOUR: f64 = 60.0;
const SECONDS_IN_HOUR: f64 = 3600.0;

const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_HEIGHT_MULTIPLIER: f64 = 0.029;
const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 20.0;

/// Distance in kilometers covered by the given number of steps.
pub fn distance_km(steps: u32) -> f64 {
    f64::from(steps) * STEP_LENGTH_METERS / METERS_IN_KM
}

/// Mean speed in km/h over the session, zero when the duration is empty.
pub fn mean_speed_kmh(steps: u32, duration: Duration) -> f64 {
    let hours = duration_hours(duration);
    if hours <= 0.0 {
        return 0.0;
    }
    distance_km(steps) / hours
}

/// Calories burned walking, driven by weight, height, and mean speed.
pub fn walking_calories(steps: u32, weight: f64, height: f64, duration: Duration) -> f64 {
    let speed = mean_speed_kmh(steps, duration);
    ((WALKING_WEIGHT_MULTIPLIER * weight) + (speed * speed / height) * WALKING_HEIGHT_MULTIPLIER)
        * duration_hours(duration)
        * MINUTES_IN_HOUR
}

/// Calories burned running, driven by weight and mean speed.
pub fn running_calories(steps: u32, weight: f64, duration: Duration) -> f64 {
    let speed = mean_speed_kmh(steps, duration);
    ((RUNNING_SPEED_MULTIPLIER * speed) - RUNNING_SPEED_SHIFT) * weight
}

/// Assemble the full metric set for a parsed training packet, selecting the
/// calorie formula by activity kind.
pub fn derive_training_summary(
    record: &TrainingRecord,
    weight: f64,
    height: f64,
) -> TrainingSummary {
    let calories = match record.activity {
        Activity::Walking => walking_calories(record.steps, weight, height, record.duration),
        Activity::Running => running_calories(record.steps, weight, record.duration),
    };

    TrainingSummary {
        activity: record.activity,
        duration_hours: duration_hours(record.duration),
        distance_km: distance_km(record.steps),
        mean_speed_kmh: mean_speed_kmh(record.steps, record.duration),
        calories,
    }
}

/// Assemble the daily walk metrics; a walk packet always uses the walking
/// formula.
pub fn derive_walk_summary(record: &WalkRecord, weight: f64, height: f64) -> WalkSummary {
    WalkSummary {
        steps: record.steps,
        distance_km: distance_km(record.steps),
        calories: walking_calories(record.steps, weight, height, record.duration),
    }
}

fn duration_hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECONDS_IN_HOUR
}
