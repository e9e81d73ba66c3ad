use anyhow::Result;
use chrono::{Duration, Local};
use serde_json::json;

use openstride::db::Database;
use openstride::models::config::Config;
use openstride::output;

pub fn run(keep_days: Option<u32>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let keep = keep_days.unwrap_or(config.retention_days);
    if keep == 0 {
        anyhow::bail!("keep-days must be positive");
    }

    let db = Database::open(&Config::db_path())?;
    let cutoff = Local::now().date_naive() - Duration::days(keep as i64);
    let purged = db.delete_records_older_than(cutoff)?;

    if human_flag {
        println!("Purged {} record(s) older than {}", purged, cutoff);
    } else {
        let out = output::success(
            "purge",
            json!({ "cutoff": cutoff, "purged": purged }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
