mod common;

use openstride::core::progress::{evaluate, progress_ratio};

// ── progress_ratio ──────────────────────────────────────────────────────────

#[test]
fn test_progress_ratio_basic() {
    assert!((progress_ratio(5000.0, 10000.0) - 0.5).abs() < 1e-9);
    assert!((progress_ratio(2.5, 10.0) - 0.25).abs() < 1e-9);
}

#[test]
fn test_progress_ratio_clamps_to_one() {
    assert_eq!(progress_ratio(15000.0, 10000.0), 1.0);
}

#[test]
fn test_progress_ratio_clamps_negative_actual_to_zero() {
    assert_eq!(progress_ratio(-50.0, 100.0), 0.0);
}

#[test]
fn test_progress_ratio_non_positive_goal_is_zero() {
    assert_eq!(progress_ratio(5000.0, 0.0), 0.0);
    assert_eq!(progress_ratio(5000.0, -100.0), 0.0);
}

// ── evaluate ────────────────────────────────────────────────────────────────

#[test]
fn test_evaluate_per_metric_ratios() {
    let mut profile = common::make_profile();
    profile.daily_step_goal = 10_000;
    profile.daily_distance_goal_km = 8.0;
    profile.daily_calorie_goal = 400;
    profile.daily_active_minutes_goal = 60;

    let record = common::make_record(common::date(2026, 8, 17), 5000, 4.0, 500, 30);
    let p = evaluate(&record, &profile);

    assert!((p.steps.ratio - 0.5).abs() < 1e-9);
    assert!((p.distance_km.ratio - 0.5).abs() < 1e-9);
    // over goal clamps to 1.0
    assert_eq!(p.calories.ratio, 1.0);
    assert!((p.active_minutes.ratio - 0.5).abs() < 1e-9);
}

#[test]
fn test_evaluate_keeps_actuals_and_goals() {
    let profile = common::make_profile();
    let record = common::make_record(common::date(2026, 8, 17), 1234, 1.2, 56, 7);
    let p = evaluate(&record, &profile);

    assert_eq!(p.steps.actual, 1234.0);
    assert_eq!(p.steps.goal, profile.daily_step_goal as f64);
}

#[test]
fn test_evaluate_empty_day_is_all_zero() {
    let profile = common::make_profile();
    let record = common::make_record(common::date(2026, 8, 17), 0, 0.0, 0, 0);
    let p = evaluate(&record, &profile);

    assert_eq!(p.steps.ratio, 0.0);
    assert_eq!(p.distance_km.ratio, 0.0);
    assert_eq!(p.calories.ratio, 0.0);
    assert_eq!(p.active_minutes.ratio, 0.0);
}
