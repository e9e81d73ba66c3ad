use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde_json::json;

use openstride::core::progress;
use openstride::db::Database;
use openstride::models::DailyRecord;
use openstride::models::config::Config;
use openstride::output;
use openstride::output::human;

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    // An absent record is an ordinary zero day, not an error.
    let record = db
        .get_record(date)?
        .unwrap_or_else(|| DailyRecord::empty(date));
    let profile = db.get_profile()?;
    let daily_progress = profile.as_ref().map(|p| progress::evaluate(&record, p));

    if human_flag {
        println!("{}", human::format_status(&record, daily_progress.as_ref()));
    } else {
        let out = output::success(
            "status",
            json!({
                "record": record,
                "onboarded": profile.is_some(),
                "progress": daily_progress,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
