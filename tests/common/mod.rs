#![allow(dead_code)]

use chrono::NaiveDate;
use openstride::db::Database;
use openstride::models::profile::Gender;
use openstride::models::{DailyRecord, UserProfile};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// A daily record with explicit values.
pub fn make_record(
    date: NaiveDate,
    steps: i64,
    distance_km: f64,
    calories: i64,
    active_minutes: i64,
) -> DailyRecord {
    DailyRecord {
        date,
        steps,
        distance_km,
        calories,
        active_minutes,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference profile: 30y male, 170 cm, 70 kg, default goals.
pub fn make_profile() -> UserProfile {
    UserProfile::new(30, 170.0, 70.0, Gender::Male)
}
