use anyhow::Result;
use serde_json::json;

use openstride::core::metrics;
use openstride::db::Database;
use openstride::models::UserProfile;
use openstride::models::config::Config;
use openstride::models::profile::{ActivityLevel, Gender};
use openstride::output;
use openstride::output::human;

#[allow(clippy::too_many_arguments)]
pub fn run(
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    steps: Option<i64>,
    distance_km: Option<f64>,
    calories: Option<i64>,
    active_minutes: Option<i64>,
    suggest_calories: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    if age == 0 {
        anyhow::bail!("age must be positive");
    }
    if height_cm <= 0.0 {
        anyhow::bail!("height must be positive");
    }
    if weight_kg <= 0.0 {
        anyhow::bail!("weight must be positive");
    }
    let gender: Gender = gender.parse()?;

    let mut profile = UserProfile::new(age, height_cm, weight_kg, gender);
    if let Some(g) = steps {
        profile.daily_step_goal = g;
    }
    if let Some(g) = distance_km {
        profile.daily_distance_goal_km = g;
    }
    if let Some(g) = calories {
        profile.daily_calorie_goal = g;
    }
    if let Some(g) = active_minutes {
        profile.daily_active_minutes_goal = g;
    }
    // Explicit opt-in only; the suggestion is never applied on its own.
    if let Some(level) = suggest_calories {
        let level: ActivityLevel = level.parse()?;
        profile.daily_calorie_goal = metrics::daily_calorie_goal_suggestion(&profile, level);
    }

    let db = Database::open(&Config::db_path())?;
    db.upsert_profile(&profile)?;
    Config::load().unwrap_or_default().save()?;

    if human_flag {
        println!("Profile saved. Data stored in {:?}", Config::data_dir());
        println!("{}", human::format_profile(&profile));
    } else {
        let out = output::success("init", json!({ "profile": profile }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
