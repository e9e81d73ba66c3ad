use anyhow::Result;
use serde_json::json;

use openstride::core::metrics;
use openstride::db::Database;
use openstride::models::config::Config;
use openstride::models::profile::ActivityLevel;
use openstride::output;
use openstride::output::human;

pub fn run_show(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path())?;
    let Some(profile) = db.get_profile()? else {
        anyhow::bail!("no profile yet — run `openstride init` first");
    };

    if human_flag {
        println!("{}", human::format_profile(&profile));
    } else {
        let out = output::success(
            "goal",
            json!({
                "steps": profile.daily_step_goal,
                "distance_km": profile.daily_distance_goal_km,
                "calories": profile.daily_calorie_goal,
                "active_minutes": profile.daily_active_minutes_goal,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_set(
    steps: Option<i64>,
    distance_km: Option<f64>,
    calories: Option<i64>,
    active_minutes: Option<i64>,
    human_flag: bool,
) -> Result<()> {
    if steps.is_none() && distance_km.is_none() && calories.is_none() && active_minutes.is_none() {
        anyhow::bail!("nothing to set: pass --steps, --distance, --calories or --active-minutes");
    }

    let db = Database::open(&Config::db_path())?;
    let mut updated = Vec::new();

    if let Some(g) = steps {
        if g <= 0 {
            anyhow::bail!("step goal must be positive");
        }
        if db.set_step_goal(g)? {
            updated.push("steps");
        }
    }
    if let Some(g) = distance_km {
        if g <= 0.0 {
            anyhow::bail!("distance goal must be positive");
        }
        if db.set_distance_goal(g)? {
            updated.push("distance_km");
        }
    }
    if let Some(g) = calories {
        if g <= 0 {
            anyhow::bail!("calorie goal must be positive");
        }
        if db.set_calorie_goal(g)? {
            updated.push("calories");
        }
    }
    if let Some(g) = active_minutes {
        if g <= 0 {
            anyhow::bail!("active-minutes goal must be positive");
        }
        if db.set_active_minutes_goal(g)? {
            updated.push("active_minutes");
        }
    }

    if updated.is_empty() {
        anyhow::bail!("no profile yet — run `openstride init` first");
    }

    if human_flag {
        println!("Updated goals: {}", updated.join(", "));
    } else {
        let out = output::success("goal", json!({ "updated": updated }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_suggest(level: Option<&str>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let Some(profile) = db.get_profile()? else {
        anyhow::bail!("no profile yet — run `openstride init` first");
    };

    let level_str = level
        .map(str::to_string)
        .or(config.activity_level)
        .unwrap_or_else(|| "moderate".to_string());
    let level: ActivityLevel = level_str.parse()?;

    let suggestion = metrics::daily_calorie_goal_suggestion(&profile, level);

    if human_flag {
        println!(
            "Suggested daily calorie-burn goal at {} activity: {} kcal (current: {})",
            level, suggestion, profile.daily_calorie_goal
        );
    } else {
        let out = output::success(
            "goal",
            json!({
                "activity_level": level,
                "suggested_calorie_goal": suggestion,
                "current_calorie_goal": profile.daily_calorie_goal,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
