use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-calendar-day aggregate. At most one record exists per date
/// (upsert semantics); created lazily on the first write of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub steps: i64,
    pub distance_km: f64,
    pub calories: i64,
    pub active_minutes: i64,
}

impl DailyRecord {
    /// An empty record for a day with no activity yet.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            distance_km: 0.0,
            calories: 0,
            active_minutes: 0,
        }
    }
}
