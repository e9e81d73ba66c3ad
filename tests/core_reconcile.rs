mod common;

use openstride::core::metrics::ActivityType;
use openstride::core::reconcile::{TrackerState, StepUpdate, apply_step_update};

fn update(total_steps: i64, delta_steps: i64, delta_millis: i64) -> StepUpdate {
    StepUpdate {
        total_steps,
        delta_steps,
        delta_millis,
    }
}

// ── movement gate ───────────────────────────────────────────────────────────

#[test]
fn test_zero_delta_steps_writes_only_steps() {
    let (_dir, db) = common::setup_db();
    let profile = common::make_profile();
    let day = common::date(2026, 8, 17);

    let outcome = apply_step_update(&db, Some(&profile), day, update(1000, 0, 0));

    assert!(outcome.steps.ok);
    assert!(!outcome.movement);
    assert!(outcome.activity.is_none());
    assert!(outcome.calories.is_none());
    assert!(outcome.distance.is_none());
    assert!(outcome.active_minutes.is_none());

    let record = db.get_record(day).unwrap().unwrap();
    assert_eq!(record.steps, 1000);
    assert_eq!(record.calories, 0);
    assert_eq!(record.distance_km, 0.0);
    assert_eq!(record.active_minutes, 0);
}

#[test]
fn test_zero_delta_millis_blocks_derived_writes() {
    let (_dir, db) = common::setup_db();
    let profile = common::make_profile();
    let day = common::date(2026, 8, 17);

    let outcome = apply_step_update(&db, Some(&profile), day, update(500, 50, 0));

    assert!(!outcome.movement);
    let record = db.get_record(day).unwrap().unwrap();
    assert_eq!(record.steps, 500);
    assert_eq!(record.calories, 0);
}

// ── full update ─────────────────────────────────────────────────────────────

#[test]
fn test_movement_tick_writes_all_four_fields() {
    let (_dir, db) = common::setup_db();
    let profile = common::make_profile();
    let day = common::date(2026, 8, 17);

    // 120 steps over one minute: cadence 120 -> walk_fast
    let outcome = apply_step_update(&db, Some(&profile), day, update(1000, 120, 60_000));

    assert!(outcome.movement);
    assert!(outcome.all_ok());
    assert_eq!(outcome.activity, Some(ActivityType::WalkFast));
    assert!(outcome.steps.ok);
    assert!(outcome.calories.unwrap().ok);
    assert!(outcome.distance.unwrap().ok);
    assert!(outcome.active_minutes.unwrap().ok);

    let record = db.get_record(day).unwrap().unwrap();
    assert_eq!(record.steps, 1000);
    // 1000 steps at walk_fast cadence 120: 8.33 min; 4.3 MET * 70 kg -> 42
    assert_eq!(record.calories, 42);
    // 170 cm male: 0.78 m stride
    assert!((record.distance_km - 0.78).abs() < 1e-9);
    // fixed steps/100 estimate
    assert_eq!(record.active_minutes, 10);
}

#[test]
fn test_activity_inferred_from_delta_cadence_not_total() {
    let (_dir, db) = common::setup_db();
    let profile = common::make_profile();
    let day = common::date(2026, 8, 17);

    // slow delta (40 steps/min) even though the daily total is large
    let outcome = apply_step_update(&db, Some(&profile), day, update(12_000, 40, 60_000));
    assert_eq!(outcome.activity, Some(ActivityType::WalkSlow));
}

#[test]
fn test_metrics_recomputed_from_cumulative_total_not_accumulated() {
    let (_dir, db) = common::setup_db();
    let profile = common::make_profile();
    let day = common::date(2026, 8, 17);

    apply_step_update(&db, Some(&profile), day, update(1000, 120, 60_000));
    apply_step_update(&db, Some(&profile), day, update(2000, 120, 60_000));

    let record = db.get_record(day).unwrap().unwrap();
    assert_eq!(record.steps, 2000);
    // derived from the 2000 total, not 42 + 84
    assert_eq!(record.calories, 84);
    assert!((record.distance_km - 1.56).abs() < 1e-9);
    assert_eq!(record.active_minutes, 20);
}

#[test]
fn test_replaying_the_same_tick_is_idempotent() {
    let (_dir, db) = common::setup_db();
    let profile = common::make_profile();
    let day = common::date(2026, 8, 17);

    apply_step_update(&db, Some(&profile), day, update(1000, 120, 60_000));
    let first = db.get_record(day).unwrap().unwrap();
    apply_step_update(&db, Some(&profile), day, update(1000, 120, 60_000));
    let second = db.get_record(day).unwrap().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_profile_writes_steps_only() {
    let (_dir, db) = common::setup_db();
    let day = common::date(2026, 8, 17);

    let outcome = apply_step_update(&db, None, day, update(1000, 120, 60_000));

    assert!(outcome.steps.ok);
    assert!(outcome.movement);
    assert!(outcome.calories.is_none());

    let record = db.get_record(day).unwrap().unwrap();
    assert_eq!(record.steps, 1000);
    assert_eq!(record.calories, 0);
}

#[test]
fn test_updates_on_different_days_stay_separate() {
    let (_dir, db) = common::setup_db();
    let profile = common::make_profile();
    let monday = common::date(2026, 8, 17);
    let tuesday = common::date(2026, 8, 18);

    apply_step_update(&db, Some(&profile), monday, update(5000, 100, 60_000));
    apply_step_update(&db, Some(&profile), tuesday, update(300, 100, 60_000));

    assert_eq!(db.get_record(monday).unwrap().unwrap().steps, 5000);
    assert_eq!(db.get_record(tuesday).unwrap().unwrap().steps, 300);
}

// ── storage failures ────────────────────────────────────────────────────────

#[test]
fn test_failed_sub_writes_are_captured_not_fatal() {
    let (dir, db) = common::setup_db();
    let profile = common::make_profile();
    let day = common::date(2026, 8, 17);

    // Pull the table out from under the open handle so every write fails.
    let raw = rusqlite::Connection::open(dir.path().join("test.db")).unwrap();
    raw.execute_batch("DROP TABLE daily_records;").unwrap();

    let outcome = apply_step_update(&db, Some(&profile), day, update(1000, 120, 60_000));

    // the tick still produces an outcome; each field reports its own failure
    assert!(outcome.movement);
    assert!(!outcome.steps.ok);
    assert!(outcome.steps.error.is_some());
    for status in [
        outcome.calories.as_ref().unwrap(),
        outcome.distance.as_ref().unwrap(),
        outcome.active_minutes.as_ref().unwrap(),
    ] {
        assert!(!status.ok);
        assert!(status.error.is_some());
    }
    assert!(!outcome.all_ok());
}

// ── tracker state ───────────────────────────────────────────────────────────

#[test]
fn test_tracker_first_reading_establishes_baseline() {
    let mut state = TrackerState::new();
    assert!(!state.is_initialized());

    let u = state.observe(52_340, 0);
    assert!(state.is_initialized());
    assert_eq!(u.total_steps, 0);
    assert_eq!(u.delta_steps, 0);
}

#[test]
fn test_tracker_offsets_raw_counter_from_baseline() {
    let mut state = TrackerState::new();
    state.observe(52_340, 0);

    let u = state.observe(52_440, 60_000);
    assert_eq!(u.total_steps, 100);
    assert_eq!(u.delta_steps, 100);
    assert_eq!(u.delta_millis, 60_000);

    let u = state.observe(52_500, 30_000);
    assert_eq!(u.total_steps, 160);
    assert_eq!(u.delta_steps, 60);
}

#[test]
fn test_tracker_clamps_counter_reset_to_zero() {
    let mut state = TrackerState::new();
    state.observe(52_340, 0);

    // counter reset below the baseline (e.g. reboot)
    let u = state.observe(10, 60_000);
    assert_eq!(u.total_steps, 0);
    assert_eq!(u.delta_steps, 0);
}
