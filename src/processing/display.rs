use crate::processing::types::{TrainingSummary, WalkSummary};

/// Message returned when the activity label matches no known training kind.
pub const UNKNOWN_TRAINING_MESSAGE: &str = "неизвестный тип тренировки";

/// Render the training report in the fixed field order expected by clients.
pub fn render_training_report(summary: &TrainingSummary) -> String {
    format!(
        "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}",
        summary.activity.label(),
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories,
    )
}

/// Render the daily walk report: step count, distance, calories.
pub fn render_walk_report(summary: &WalkSummary) -> String {
    format!(
        "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
        summary.steps, summary.distance_km, summary.calories,
    )
}
