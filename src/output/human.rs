use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::progress::{DailyProgress, MetricProgress};
use crate::core::reconcile::ReconcileOutcome;
use crate::core::stats::{MonthlyStats, PeriodComparison, WeeklyStats};
use crate::models::{DailyRecord, UserProfile};

/// Pretty-print a day's record.
pub fn format_record(r: &DailyRecord) -> String {
    format!(
        "{} | {} steps | {:.2} km | {} kcal | {} active min",
        r.date, r.steps, r.distance_km, r.calories, r.active_minutes
    )
}

fn progress_bar(ratio: f64) -> String {
    let filled = (ratio * 20.0).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
    if ratio >= 1.0 {
        bar.green().to_string()
    } else {
        bar.to_string()
    }
}

fn progress_line(label: &str, p: &MetricProgress) -> String {
    format!(
        "{:<15} {} {:>5.0}%  ({} / {})",
        label,
        progress_bar(p.ratio),
        p.ratio * 100.0,
        p.actual,
        p.goal
    )
}

/// Pretty-print today's status: the record plus goal progress.
pub fn format_status(record: &DailyRecord, progress: Option<&DailyProgress>) -> String {
    let mut out = format!("=== OpenStride — {} ===\n\n", record.date);
    out.push_str(&format_record(record));
    match progress {
        Some(p) => {
            out.push_str("\n\n");
            out.push_str(&progress_line("steps", &p.steps));
            out.push('\n');
            out.push_str(&progress_line("distance (km)", &p.distance_km));
            out.push('\n');
            out.push_str(&progress_line("calories", &p.calories));
            out.push('\n');
            out.push_str(&progress_line("active min", &p.active_minutes));
        }
        None => out.push_str("\n\nNo profile yet — run `openstride init`."),
    }
    out
}

fn change_cell(pct: i64) -> String {
    let s = format!("{:+}%", pct);
    if pct > 0 {
        s.green().to_string()
    } else if pct < 0 {
        s.red().to_string()
    } else {
        s
    }
}

/// Weekly stats as a table, with the previous-week comparison.
pub fn format_week(stats: &WeeklyStats, comparison: &PeriodComparison) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["metric", "total", "daily avg", "vs last week"]);
    table.add_row(vec![
        "steps".to_string(),
        stats.total_steps.to_string(),
        stats.average_steps.to_string(),
        change_cell(comparison.steps_change_pct),
    ]);
    table.add_row(vec![
        "distance (km)".to_string(),
        format!("{:.2}", stats.total_distance_km),
        format!("{:.2}", stats.average_distance_km),
        change_cell(comparison.distance_change_pct),
    ]);
    table.add_row(vec![
        "calories".to_string(),
        stats.total_calories.to_string(),
        stats.average_calories.to_string(),
        change_cell(comparison.calories_change_pct),
    ]);
    table.add_row(vec![
        "active min".to_string(),
        stats.total_active_minutes.to_string(),
        stats.average_active_minutes.to_string(),
        change_cell(comparison.active_minutes_change_pct),
    ]);

    format!(
        "Week {} ({} .. {}), {} day(s) recorded\n{}",
        stats.week_id, stats.start_date, stats.end_date, stats.record_count, table
    )
}

/// Monthly stats as a table plus best day / active days.
pub fn format_month(stats: &MonthlyStats, comparison: &PeriodComparison) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["metric", "total", "daily avg", "vs last month"]);
    table.add_row(vec![
        "steps".to_string(),
        stats.total_steps.to_string(),
        stats.average_steps.to_string(),
        change_cell(comparison.steps_change_pct),
    ]);
    table.add_row(vec![
        "distance (km)".to_string(),
        format!("{:.2}", stats.total_distance_km),
        format!("{:.2}", stats.average_distance_km),
        change_cell(comparison.distance_change_pct),
    ]);
    table.add_row(vec![
        "calories".to_string(),
        stats.total_calories.to_string(),
        stats.average_calories.to_string(),
        change_cell(comparison.calories_change_pct),
    ]);
    table.add_row(vec![
        "active min".to_string(),
        stats.total_active_minutes.to_string(),
        stats.average_active_minutes.to_string(),
        change_cell(comparison.active_minutes_change_pct),
    ]);

    let mut out = format!(
        "{}-{:02}, {} day(s) recorded\n{}",
        stats.year, stats.month, stats.record_count, table
    );
    if let Some(ref best) = stats.best_day {
        out.push_str(&format!("\nBest day: {} ({} steps)", best.date, best.steps));
    }
    out.push_str(&format!("\nActive days (>= 1000 steps): {}", stats.active_days));
    out
}

/// Pretty-print the outcome of one track tick.
pub fn format_track(outcome: &ReconcileOutcome) -> String {
    let mark = |ok: bool| if ok { "ok" } else { "FAILED" };
    let mut out = format!(
        "{} | steps write: {}",
        outcome.date,
        mark(outcome.steps.ok)
    );
    if !outcome.movement {
        out.push_str(" | no movement, derived metrics skipped");
        return out;
    }
    if let Some(ref a) = outcome.activity {
        out.push_str(&format!(" | activity: {}", a));
    }
    for (label, status) in [
        ("calories", &outcome.calories),
        ("distance", &outcome.distance),
        ("active min", &outcome.active_minutes),
    ] {
        if let Some(s) = status {
            out.push_str(&format!(" | {}: {}", label, mark(s.ok)));
        }
    }
    out
}

/// Pretty-print the profile with its goals.
pub fn format_profile(p: &UserProfile) -> String {
    format!(
        "age {} | {} cm | {} kg | {}\nGoals: {} steps, {:.1} km, {} kcal, {} active min",
        p.age,
        p.height_cm,
        p.weight_kg,
        p.gender,
        p.daily_step_goal,
        p.daily_distance_goal_km,
        p.daily_calorie_goal,
        p.daily_active_minutes_goal
    )
}
