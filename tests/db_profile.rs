mod common;

use openstride::models::UserProfile;
use openstride::models::profile::Gender;

#[test]
fn test_get_profile_before_onboarding_is_none() {
    let (_dir, db) = common::setup_db();
    assert!(db.get_profile().unwrap().is_none());
}

#[test]
fn test_profile_round_trip() {
    let (_dir, db) = common::setup_db();
    let mut profile = UserProfile::new(42, 168.5, 61.2, Gender::Female);
    profile.daily_step_goal = 12_000;
    profile.daily_distance_goal_km = 9.5;
    profile.daily_calorie_goal = 550;
    profile.daily_active_minutes_goal = 90;

    db.upsert_profile(&profile).unwrap();
    let loaded = db.get_profile().unwrap().unwrap();

    assert_eq!(loaded.age, 42);
    assert_eq!(loaded.height_cm, 168.5);
    assert_eq!(loaded.weight_kg, 61.2);
    assert_eq!(loaded.gender, Gender::Female);
    assert_eq!(loaded.daily_step_goal, 12_000);
    assert_eq!(loaded.daily_distance_goal_km, 9.5);
    assert_eq!(loaded.daily_calorie_goal, 550);
    assert_eq!(loaded.daily_active_minutes_goal, 90);
}

#[test]
fn test_upsert_profile_is_singleton() {
    let (_dir, db) = common::setup_db();
    db.upsert_profile(&UserProfile::new(30, 170.0, 70.0, Gender::Male))
        .unwrap();
    db.upsert_profile(&UserProfile::new(31, 171.0, 71.0, Gender::Other))
        .unwrap();

    let loaded = db.get_profile().unwrap().unwrap();
    assert_eq!(loaded.age, 31);
    assert_eq!(loaded.gender, Gender::Other);
}

// ── goal updaters ───────────────────────────────────────────────────────────

#[test]
fn test_goal_updaters_require_existing_profile() {
    let (_dir, db) = common::setup_db();
    assert!(!db.set_step_goal(12_000).unwrap());
    assert!(!db.set_distance_goal(9.0).unwrap());
    assert!(!db.set_calorie_goal(500).unwrap());
    assert!(!db.set_active_minutes_goal(90).unwrap());
}

#[test]
fn test_goal_updaters_change_only_their_field() {
    let (_dir, db) = common::setup_db();
    db.upsert_profile(&common::make_profile()).unwrap();

    assert!(db.set_step_goal(15_000).unwrap());
    assert!(db.set_calorie_goal(500).unwrap());

    let loaded = db.get_profile().unwrap().unwrap();
    assert_eq!(loaded.daily_step_goal, 15_000);
    assert_eq!(loaded.daily_calorie_goal, 500);
    // untouched fields keep their defaults
    assert_eq!(loaded.daily_distance_goal_km, 7.0);
    assert_eq!(loaded.daily_active_minutes_goal, 60);
}
