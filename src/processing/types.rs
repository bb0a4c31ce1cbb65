use std::fmt;
use std::time::Duration;

/// Training activity kind recognized by the calorie formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Walking,
    Running,
}

impl Activity {
    /// Resolve a raw packet label against the known activity names.
    ///
    /// Labels are matched verbatim after trimming; anything else is the
    /// unknown-activity condition handled at the parse boundary.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Ходьба" => Some(Activity::Walking),
            "Бег" => Some(Activity::Running),
            _ => None,
        }
    }

    /// The label the activity was parsed from, used in the rendered report.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Walking => "Ходьба",
            Activity::Running => "Бег",
        }
    }
}

/// Parsed fields of a daily walk packet: `"<steps>,<duration>"`.
#[derive(Debug, Clone)]
pub struct WalkRecord {
    pub steps: u32,
    pub duration: Duration,
}

/// Parsed fields of a training packet: `"<steps>,<activity>,<duration>"`.
#[derive(Debug, Clone)]
pub struct TrainingRecord {
    pub steps: u32,
    pub activity: Activity,
    pub duration: Duration,
}

/// Derived metrics for a daily walk packet.
#[derive(Debug, Clone)]
pub struct WalkSummary {
    pub steps: u32,
    pub distance_km: f64,
    pub calories: f64,
}

/// Derived metrics for one training session.
#[derive(Debug, Clone)]
pub struct TrainingSummary {
    pub activity: Activity,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

#[derive(Debug)]
pub enum RecordError {
    /// The packet does not split into the expected number of fields.
    InvalidFormat { expected: usize, found: usize },
    /// The steps field is absent, non-numeric, or not strictly positive.
    InvalidSteps(String),
    /// The duration field does not parse under the duration grammar.
    InvalidDuration(String),
    /// A training packet carried a zero-length duration.
    NonPositiveDuration,
    /// The activity label matches no known training kind.
    UnknownActivity(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidFormat { expected, found } => {
                write!(
                    f,
                    "invalid data format: expected {expected} fields, got {found}"
                )
            }
            RecordError::InvalidSteps(raw) => write!(f, "invalid steps value: {raw}"),
            RecordError::InvalidDuration(raw) => write!(f, "invalid duration format: {raw}"),
            RecordError::NonPositiveDuration => {
                write!(f, "invalid duration: must be greater than zero")
            }
            RecordError::UnknownActivity(label) => write!(f, "unknown training type: {label}"),
        }
    }
}

impl std::error::Error for RecordError {}
