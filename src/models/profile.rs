use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Gender {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => anyhow::bail!("invalid gender: {} (expected male/female/other)", s),
        }
    }
}

/// Overall activity level used only for the calorie-goal suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => anyhow::bail!(
                "invalid activity level: {} (expected sedentary/light/moderate/active/very_active)",
                s
            ),
        }
    }
}

/// Singleton user profile. Absence means onboarding has not completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: Gender,
    pub daily_step_goal: i64,
    pub daily_distance_goal_km: f64,
    pub daily_calorie_goal: i64,
    pub daily_active_minutes_goal: i64,
}

impl UserProfile {
    pub fn new(age: u32, height_cm: f64, weight_kg: f64, gender: Gender) -> Self {
        Self {
            age,
            height_cm,
            weight_kg,
            gender,
            daily_step_goal: 10_000,
            daily_distance_goal_km: 7.0,
            daily_calorie_goal: 400,
            daily_active_minutes_goal: 60,
        }
    }
}
