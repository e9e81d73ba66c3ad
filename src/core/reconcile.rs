use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::metrics::{self, ActivityType};
use crate::db::Database;
use crate::models::UserProfile;

/// One reading from the step-counter source.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StepUpdate {
    pub total_steps: i64,
    pub delta_steps: i64,
    pub delta_millis: i64,
}

/// Explicit tracking state for converting a raw cumulative hardware
/// counter into day-relative totals. The baseline is captured from the
/// first reading after tracking starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerState {
    baseline_steps: i64,
    last_total: i64,
    initialized: bool,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Fold a raw counter reading into the state, producing the update to
    /// feed the reconciler. The first reading establishes the baseline and
    /// yields a zero-delta update.
    pub fn observe(&mut self, raw_counter: i64, delta_millis: i64) -> StepUpdate {
        if !self.initialized {
            self.baseline_steps = raw_counter;
            self.last_total = 0;
            self.initialized = true;
        }
        // A counter reset (reboot) would go negative; clamp to zero.
        let total = (raw_counter - self.baseline_steps).max(0);
        let delta = (total - self.last_total).max(0);
        self.last_total = total;
        StepUpdate {
            total_steps: total,
            delta_steps: delta,
            delta_millis,
        }
    }
}

/// Outcome of one persistence attempt for a single field.
#[derive(Debug, Serialize)]
pub struct WriteStatus {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WriteStatus {
    fn from_result(r: Result<()>) -> Self {
        match r {
            Ok(()) => Self {
                ok: true,
                error: None,
            },
            Err(e) => Self {
                ok: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// What one sensor tick did to the day's record.
#[derive(Debug, Serialize)]
pub struct ReconcileOutcome {
    pub date: NaiveDate,
    pub steps: WriteStatus,
    pub movement: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<WriteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<WriteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_minutes: Option<WriteStatus>,
}

impl ReconcileOutcome {
    pub fn all_ok(&self) -> bool {
        let sub_ok = |s: &Option<WriteStatus>| s.as_ref().map(|w| w.ok).unwrap_or(true);
        self.steps.ok
            && sub_ok(&self.calories)
            && sub_ok(&self.distance)
            && sub_ok(&self.active_minutes)
    }
}

/// Fixed cadence assumption behind the active-minutes estimate.
const ACTIVE_MINUTES_STEPS_PER_MINUTE: i64 = 100;

/// Merge one step reading into the day's persisted record.
///
/// The step total is always written (creating the record if absent).
/// Calories, distance and active minutes are only written when movement
/// occurred: `delta_steps > 0 && delta_millis > 0`. A zero-delta tick must
/// not produce non-zero-duration metrics.
///
/// Calories and distance are recomputed from the cumulative daily total on
/// every tick rather than accumulated from deltas, so the writes are
/// idempotent. The four writes are independent upserts against the same
/// row; one failing does not block or roll back the others.
pub fn apply_step_update(
    db: &Database,
    profile: Option<&UserProfile>,
    date: NaiveDate,
    update: StepUpdate,
) -> ReconcileOutcome {
    let steps = WriteStatus::from_result(db.upsert_steps(date, update.total_steps.max(0)));

    let movement = update.delta_steps > 0 && update.delta_millis > 0;
    if !movement {
        return ReconcileOutcome {
            date,
            steps,
            movement,
            activity: None,
            calories: None,
            distance: None,
            active_minutes: None,
        };
    }

    let Some(profile) = profile else {
        // Onboarding incomplete: nothing to derive metrics from.
        return ReconcileOutcome {
            date,
            steps,
            movement,
            activity: None,
            calories: None,
            distance: None,
            active_minutes: None,
        };
    };

    let window_minutes = update.delta_millis as f64 / 60_000.0;
    let activity = metrics::estimate_activity_type(update.delta_steps, window_minutes);

    let calories = metrics::calories_from_steps(update.total_steps, profile, activity);
    let distance = metrics::distance_from_steps(update.total_steps, profile);
    // Coarse estimate using a fixed cadence, deliberately independent of
    // the inferred activity type above (matches the original behavior).
    let active = update.total_steps / ACTIVE_MINUTES_STEPS_PER_MINUTE;

    ReconcileOutcome {
        date,
        steps,
        movement,
        activity: Some(activity),
        calories: Some(WriteStatus::from_result(db.upsert_calories(date, calories))),
        distance: Some(WriteStatus::from_result(db.upsert_distance(date, distance))),
        active_minutes: Some(WriteStatus::from_result(
            db.upsert_active_minutes(date, active),
        )),
    }
}
