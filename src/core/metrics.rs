use serde::{Deserialize, Serialize};

use crate::models::profile::{ActivityLevel, Gender, UserProfile};

/// Cadence tier inferred from steps per minute. Ordering matters: each
/// variant is a strictly higher intensity than the one before it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    WalkSlow,
    WalkNormal,
    WalkFast,
    RunSlow,
    RunNormal,
    RunFast,
}

impl ActivityType {
    /// Metabolic equivalent for this intensity (Compendium of Physical
    /// Activities values).
    pub fn met(&self) -> f64 {
        match self {
            Self::WalkSlow => 2.8,
            Self::WalkNormal => 3.5,
            Self::WalkFast => 4.3,
            Self::RunSlow => 8.3,
            Self::RunNormal => 9.8,
            Self::RunFast => 11.0,
        }
    }

    /// Typical cadence (steps/minute) used to estimate duration from a
    /// step count.
    pub fn cadence(&self) -> f64 {
        match self {
            Self::WalkSlow => 70.0,
            Self::WalkNormal => 95.0,
            Self::WalkFast => 120.0,
            Self::RunSlow => 140.0,
            Self::RunNormal => 165.0,
            Self::RunFast => 190.0,
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WalkSlow => write!(f, "walk_slow"),
            Self::WalkNormal => write!(f, "walk_normal"),
            Self::WalkFast => write!(f, "walk_fast"),
            Self::RunSlow => write!(f, "run_slow"),
            Self::RunNormal => write!(f, "run_normal"),
            Self::RunFast => write!(f, "run_fast"),
        }
    }
}

/// Estimate calories burned for a step count at a given intensity.
///
/// Duration is estimated from the tier's typical cadence, then
/// `MET * weight_kg * hours`, rounded to the nearest integer.
pub fn calories_from_steps(steps: i64, profile: &UserProfile, activity: ActivityType) -> i64 {
    if steps <= 0 {
        return 0;
    }
    let duration_minutes = steps as f64 / activity.cadence();
    calories_from_activity(duration_minutes, profile, activity)
}

/// Calories burned for a duration at a given intensity.
pub fn calories_from_activity(
    duration_minutes: f64,
    profile: &UserProfile,
    activity: ActivityType,
) -> i64 {
    if duration_minutes <= 0.0 {
        return 0;
    }
    let hours = duration_minutes / 60.0;
    (activity.met() * profile.weight_kg * hours).round() as i64
}

/// Distance in km for a step count, from a per-gender average stride
/// length scaled by the user's height relative to 170 cm.
pub fn distance_from_steps(steps: i64, profile: &UserProfile) -> f64 {
    if steps <= 0 {
        return 0.0;
    }
    let stride_m = match profile.gender {
        Gender::Male => 0.78,
        Gender::Female => 0.70,
        Gender::Other => (0.78 + 0.70) / 2.0,
    };
    let scaled = stride_m * (profile.height_cm / 170.0);
    steps as f64 * scaled / 1000.0
}

/// Infer an intensity tier from a step count over a time window.
///
/// Tier boundaries (steps/minute): 80 starts walk_normal, 110 walk_fast,
/// 130 run_slow, 150 run_normal, 180 run_fast. A non-positive window
/// defaults to walk_normal.
pub fn estimate_activity_type(step_count: i64, time_window_minutes: f64) -> ActivityType {
    if time_window_minutes <= 0.0 {
        return ActivityType::WalkNormal;
    }
    let cadence = step_count as f64 / time_window_minutes;
    match cadence {
        c if c < 80.0 => ActivityType::WalkSlow,
        c if c < 110.0 => ActivityType::WalkNormal,
        c if c < 130.0 => ActivityType::WalkFast,
        c if c < 150.0 => ActivityType::RunSlow,
        c if c < 180.0 => ActivityType::RunNormal,
        _ => ActivityType::RunFast,
    }
}

/// Harris-Benedict basal metabolic rate. Other = mean of the male and
/// female formulas.
fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let w = profile.weight_kg;
    let h = profile.height_cm;
    let a = profile.age as f64;
    let male = 88.362 + 13.397 * w + 4.799 * h - 5.677 * a;
    let female = 447.593 + 9.247 * w + 3.098 * h - 4.330 * a;
    match profile.gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Other => (male + female) / 2.0,
    }
}

/// Fraction of daily energy expenditure attributed to deliberate exercise.
const EXERCISE_SHARE: f64 = 0.20;

/// Suggest a daily calorie-burn goal from BMR and overall activity level.
/// A suggestion only; callers decide whether to apply it.
pub fn daily_calorie_goal_suggestion(profile: &UserProfile, level: ActivityLevel) -> i64 {
    let daily_expenditure = basal_metabolic_rate(profile) * level.multiplier();
    (daily_expenditure * EXERCISE_SHARE).round() as i64
}
