use anyhow::Result;
use chrono::{Local, NaiveDate};

use openstride::core::reconcile::{self, StepUpdate};
use openstride::db::Database;
use openstride::models::config::Config;
use openstride::output;
use openstride::output::human;

pub fn run(
    total_steps: i64,
    delta_steps: i64,
    delta_millis: i64,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    if total_steps < 0 {
        anyhow::bail!("total steps cannot be negative");
    }

    let db = Database::open(&Config::db_path())?;
    let profile = db.get_profile()?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let update = StepUpdate {
        total_steps,
        delta_steps,
        delta_millis,
    };
    let outcome = reconcile::apply_step_update(&db, profile.as_ref(), date, update);

    if human_flag {
        println!("{}", human::format_track(&outcome));
    } else {
        let out = output::success("track", serde_json::to_value(&outcome)?);
        println!("{}", serde_json::to_string(&out)?);
    }

    // A failed sub-write is reported in the outcome, not as a process
    // error; the tracking loop keeps feeding ticks regardless.
    Ok(())
}
