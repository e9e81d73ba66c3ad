use serde::Serialize;

use crate::models::{DailyRecord, UserProfile};

/// Fraction of a goal achieved, clamped to [0, 1]. A non-positive goal
/// yields 0 rather than dividing by it.
pub fn progress_ratio(actual: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (actual / goal).clamp(0.0, 1.0)
}

#[derive(Debug, Serialize)]
pub struct MetricProgress {
    pub actual: f64,
    pub goal: f64,
    pub ratio: f64,
}

impl MetricProgress {
    fn new(actual: f64, goal: f64) -> Self {
        Self {
            actual,
            goal,
            ratio: progress_ratio(actual, goal),
        }
    }
}

/// A day's metrics held against the profile's goals. Each metric is
/// evaluated independently; there is no combined score.
#[derive(Debug, Serialize)]
pub struct DailyProgress {
    pub steps: MetricProgress,
    pub distance_km: MetricProgress,
    pub calories: MetricProgress,
    pub active_minutes: MetricProgress,
}

pub fn evaluate(record: &DailyRecord, profile: &UserProfile) -> DailyProgress {
    DailyProgress {
        steps: MetricProgress::new(record.steps as f64, profile.daily_step_goal as f64),
        distance_km: MetricProgress::new(record.distance_km, profile.daily_distance_goal_km),
        calories: MetricProgress::new(record.calories as f64, profile.daily_calorie_goal as f64),
        active_minutes: MetricProgress::new(
            record.active_minutes as f64,
            profile.daily_active_minutes_goal as f64,
        ),
    }
}
