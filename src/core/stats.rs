use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::DailyRecord;

/// Week identifier in `YYYY-Www` form (ISO week numbering).
pub fn week_identifier(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// The Monday..Sunday span containing `date`, in local calendar days.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let weekday = date.weekday().num_days_from_monday();
    let start = date - Duration::days(weekday as i64);
    let end = start + Duration::days(6);
    (start, end)
}

/// First and last day of a calendar month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Percentage change between two integer totals, rounded to the nearest
/// whole percent. Both zero is "no change"; growth from zero reports 100.
pub fn percentage_change(old: i64, new: i64) -> i64 {
    if old == 0 && new == 0 {
        return 0;
    }
    if old == 0 {
        return 100;
    }
    (((new - old) as f64 / old as f64) * 100.0).round() as i64
}

/// Same rule for real-valued totals.
pub fn percentage_change_f64(old: f64, new: f64) -> i64 {
    if old == 0.0 && new == 0.0 {
        return 0;
    }
    if old == 0.0 {
        return 100;
    }
    (((new - old) / old) * 100.0).round() as i64
}

/// Weekly rollup. Derived from daily records on demand; never a source of
/// truth.
#[derive(Debug, Serialize)]
pub struct WeeklyStats {
    pub week_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub record_count: u32,
    pub total_steps: i64,
    pub total_distance_km: f64,
    pub total_calories: i64,
    pub total_active_minutes: i64,
    pub average_steps: i64,
    pub average_distance_km: f64,
    pub average_calories: i64,
    pub average_active_minutes: i64,
}

/// Fold a week's records into totals and averages. Integer averages
/// truncate; an empty input produces the all-zero stats for the week.
pub fn compute_weekly(records: &[DailyRecord], week_of: NaiveDate) -> WeeklyStats {
    let (start_date, end_date) = week_bounds(week_of);
    let totals = Totals::from_records(records);
    let n = records.len() as i64;

    WeeklyStats {
        week_id: week_identifier(week_of),
        start_date,
        end_date,
        record_count: records.len() as u32,
        total_steps: totals.steps,
        total_distance_km: totals.distance_km,
        total_calories: totals.calories,
        total_active_minutes: totals.active_minutes,
        average_steps: if n > 0 { totals.steps / n } else { 0 },
        average_distance_km: if n > 0 {
            totals.distance_km / n as f64
        } else {
            0.0
        },
        average_calories: if n > 0 { totals.calories / n } else { 0 },
        average_active_minutes: if n > 0 { totals.active_minutes / n } else { 0 },
    }
}

/// Days with at least this many steps count as "active" in monthly stats.
const ACTIVE_DAY_STEP_THRESHOLD: i64 = 1000;

#[derive(Debug, Serialize)]
pub struct BestDay {
    pub date: NaiveDate,
    pub steps: i64,
}

/// Monthly rollup: weekly-style totals plus best day and active-day count.
#[derive(Debug, Serialize)]
pub struct MonthlyStats {
    pub year: i32,
    pub month: u32,
    pub record_count: u32,
    pub total_steps: i64,
    pub total_distance_km: f64,
    pub total_calories: i64,
    pub total_active_minutes: i64,
    pub average_steps: i64,
    pub average_distance_km: f64,
    pub average_calories: i64,
    pub average_active_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_day: Option<BestDay>,
    pub active_days: u32,
}

pub fn compute_monthly(records: &[DailyRecord], year: i32, month: u32) -> MonthlyStats {
    let totals = Totals::from_records(records);
    let n = records.len() as i64;

    // First-encountered wins ties, so strictly-greater comparison.
    let mut best: Option<&DailyRecord> = None;
    for r in records {
        if best.map(|b| r.steps > b.steps).unwrap_or(true) {
            best = Some(r);
        }
    }

    let active_days = records
        .iter()
        .filter(|r| r.steps >= ACTIVE_DAY_STEP_THRESHOLD)
        .count() as u32;

    MonthlyStats {
        year,
        month,
        record_count: records.len() as u32,
        total_steps: totals.steps,
        total_distance_km: totals.distance_km,
        total_calories: totals.calories,
        total_active_minutes: totals.active_minutes,
        average_steps: if n > 0 { totals.steps / n } else { 0 },
        average_distance_km: if n > 0 {
            totals.distance_km / n as f64
        } else {
            0.0
        },
        average_calories: if n > 0 { totals.calories / n } else { 0 },
        average_active_minutes: if n > 0 { totals.active_minutes / n } else { 0 },
        best_day: best.map(|r| BestDay {
            date: r.date,
            steps: r.steps,
        }),
        active_days,
    }
}

struct Totals {
    steps: i64,
    distance_km: f64,
    calories: i64,
    active_minutes: i64,
}

impl Totals {
    fn from_records(records: &[DailyRecord]) -> Self {
        let mut t = Self {
            steps: 0,
            distance_km: 0.0,
            calories: 0,
            active_minutes: 0,
        };
        for r in records {
            t.steps += r.steps;
            t.distance_km += r.distance_km;
            t.calories += r.calories;
            t.active_minutes += r.active_minutes;
        }
        t
    }
}

/// Period-over-period comparison between two rollups of the same shape.
#[derive(Debug, Serialize)]
pub struct PeriodComparison {
    pub steps_change_pct: i64,
    pub distance_change_pct: i64,
    pub calories_change_pct: i64,
    pub active_minutes_change_pct: i64,
}

impl PeriodComparison {
    pub fn weekly(previous: &WeeklyStats, current: &WeeklyStats) -> Self {
        Self {
            steps_change_pct: percentage_change(previous.total_steps, current.total_steps),
            distance_change_pct: percentage_change_f64(
                previous.total_distance_km,
                current.total_distance_km,
            ),
            calories_change_pct: percentage_change(previous.total_calories, current.total_calories),
            active_minutes_change_pct: percentage_change(
                previous.total_active_minutes,
                current.total_active_minutes,
            ),
        }
    }

    pub fn monthly(previous: &MonthlyStats, current: &MonthlyStats) -> Self {
        Self {
            steps_change_pct: percentage_change(previous.total_steps, current.total_steps),
            distance_change_pct: percentage_change_f64(
                previous.total_distance_km,
                current.total_distance_km,
            ),
            calories_change_pct: percentage_change(previous.total_calories, current.total_calories),
            active_minutes_change_pct: percentage_change(
                previous.total_active_minutes,
                current.total_active_minutes,
            ),
        }
    }
}
