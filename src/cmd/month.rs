use anyhow::Result;
use chrono::{Datelike, Local};
use serde_json::json;

use openstride::core::stats::{self, PeriodComparison};
use openstride::db::Database;
use openstride::models::config::Config;
use openstride::output;
use openstride::output::human;

pub fn run(year: Option<i32>, month: Option<u32>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let (start, end) = stats::month_bounds(year, month)
        .ok_or_else(|| anyhow::anyhow!("invalid month: {}-{:02}", year, month))?;
    let current = stats::compute_monthly(&db.get_records_in_range(start, end)?, year, month);

    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let (prev_start, prev_end) = stats::month_bounds(prev_year, prev_month)
        .ok_or_else(|| anyhow::anyhow!("invalid month: {}-{:02}", prev_year, prev_month))?;
    let previous = stats::compute_monthly(
        &db.get_records_in_range(prev_start, prev_end)?,
        prev_year,
        prev_month,
    );

    let comparison = PeriodComparison::monthly(&previous, &current);

    if human_flag {
        println!("{}", human::format_month(&current, &comparison));
    } else {
        let out = output::success(
            "month",
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
