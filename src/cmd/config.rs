use anyhow::Result;
use serde_json::json;

use openstride::models::config::Config;
use openstride::models::profile::ActivityLevel;
use openstride::output;

pub fn run_show(human_flag: bool) -> Result<()> {
    let config = Config::load()?;

    if human_flag {
        println!("retention_days = {}", config.retention_days);
        println!(
            "activity_level = {}",
            config.activity_level.as_deref().unwrap_or("(unset)")
        );
    } else {
        let out = output::success("config", serde_json::to_value(&config)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "retention_days" => {
            let days: u32 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid retention_days: {}", value))?;
            if days == 0 {
                anyhow::bail!("retention_days must be positive");
            }
            config.retention_days = days;
        }
        "activity_level" => {
            // Validate against the known levels before storing.
            let _: ActivityLevel = value.parse()?;
            config.activity_level = Some(value.to_string());
        }
        _ => anyhow::bail!("unknown config key: {} (expected retention_days/activity_level)", key),
    }

    config.save()?;

    let out = output::success("config", json!({ "key": key, "value": value }));
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
