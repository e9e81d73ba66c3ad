use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use serde_json::json;

use openstride::core::stats::{self, PeriodComparison};
use openstride::db::Database;
use openstride::models::config::Config;
use openstride::output;
use openstride::output::human;

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let anchor = date.unwrap_or_else(|| Local::now().date_naive());

    let (start, end) = stats::week_bounds(anchor);
    let current = stats::compute_weekly(&db.get_records_in_range(start, end)?, anchor);

    let prev_anchor = start - Duration::days(1);
    let (prev_start, prev_end) = stats::week_bounds(prev_anchor);
    let prev_records = db.get_records_in_range(prev_start, prev_end)?;
    let previous = stats::compute_weekly(&prev_records, prev_anchor);

    let comparison = PeriodComparison::weekly(&previous, &current);

    if human_flag {
        println!("{}", human::format_week(&current, &comparison));
    } else {
        let out = output::success(
            "week",
            json!({
                "current": current,
                "previous": previous,
                "change": comparison,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
