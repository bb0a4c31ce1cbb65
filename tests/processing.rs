use rustysteps::processing::{
    Activity, RecordError, STEP_LENGTH_METERS, UNKNOWN_TRAINING_MESSAGE, day_action_info,
    training_info, training_summary, walk_summary,
};

const WEIGHT: f64 = 70.0;
const HEIGHT: f64 = 175.0;

#[test]
fn walk_distance_follows_step_length() {
    for (steps, duration) in [(1_u32, "1h"), (5000, "1h30m"), (12345, "45m"), (80000, "8h")] {
        let summary = walk_summary(&format!("{steps},{duration}"), WEIGHT, HEIGHT)
            .expect("packet should parse");
        let expected = f64::from(steps) * STEP_LENGTH_METERS / 1000.0;
        assert!(
            (summary.distance_km - expected).abs() < 1e-9,
            "distance for {steps} steps was {}",
            summary.distance_km
        );
    }
}

#[test]
fn non_positive_steps_are_a_value_error() {
    assert!(matches!(
        walk_summary("0,1h", WEIGHT, HEIGHT),
        Err(RecordError::InvalidSteps(_))
    ));
    assert!(matches!(
        walk_summary("-5,1h", WEIGHT, HEIGHT),
        Err(RecordError::InvalidSteps(_))
    ));
}

#[test]
fn malformed_duration_is_a_duration_error() {
    assert!(matches!(
        walk_summary("5000,abc", WEIGHT, HEIGHT),
        Err(RecordError::InvalidDuration(_))
    ));
}

#[test]
fn zero_training_duration_is_a_duration_error() {
    assert!(matches!(
        training_summary("5000,Бег,0m", WEIGHT, HEIGHT),
        Err(RecordError::NonPositiveDuration)
    ));
}

#[test]
fn walking_training_report_matches_formulas() {
    let report = training_info("5000,Ходьба,1h", WEIGHT, HEIGHT);
    let speed = 3.25_f64;
    let calories = ((0.035 * WEIGHT) + (speed * speed / HEIGHT) * 0.029) * 60.0;
    assert_eq!(
        report,
        format!(
            "Тип тренировки: Ходьба\nДлительность: 1.00 ч.\nДистанция: 3.25 км.\nСкорость: 3.25 км/ч\nСожгли калорий: {calories:.2}"
        )
    );
}

#[test]
fn running_training_uses_the_speed_formula() {
    let summary =
        training_summary("5000,Бег,30m", WEIGHT, HEIGHT).expect("packet should parse");
    assert_eq!(summary.activity, Activity::Running);
    assert!((summary.mean_speed_kmh - 6.5).abs() < 1e-9);
    // (18.0 * 6.5 - 20.0) * 70.0
    assert!((summary.calories - 6790.0).abs() < 1e-9);

    let report = training_info("5000,Бег,30m", WEIGHT, HEIGHT);
    assert_eq!(
        report,
        "Тип тренировки: Бег\nДлительность: 0.50 ч.\nДистанция: 3.25 км.\nСкорость: 6.50 км/ч\nСожгли калорий: 6790.00"
    );
}

#[test]
fn unknown_activity_yields_the_fixed_message() {
    assert_eq!(
        training_info("5000,Плавание,1h", WEIGHT, HEIGHT),
        UNKNOWN_TRAINING_MESSAGE
    );
}

#[test]
fn day_action_reports_steps_and_distance() {
    let report = day_action_info("10000,2h", WEIGHT, HEIGHT);
    assert_eq!(
        report,
        "Количество шагов: 10000.\nДистанция составила 6.50 км.\nВы сожгли 294.21 ккал."
    );
}

#[test]
fn day_action_degrades_to_empty_on_bad_input() {
    assert_eq!(day_action_info("bad,input", WEIGHT, HEIGHT), "");
}
