use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "openstride", version, about = "Agent-native step tracking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up the user profile and data directory
    Init {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Height in cm
        #[arg(long)]
        height: f64,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Gender (male/female/other)
        #[arg(long)]
        gender: String,

        /// Daily step goal
        #[arg(long)]
        steps: Option<i64>,

        /// Daily distance goal (km)
        #[arg(long)]
        distance: Option<f64>,

        /// Daily calorie-burn goal (kcal)
        #[arg(long)]
        calories: Option<i64>,

        /// Daily active-minutes goal
        #[arg(long)]
        active_minutes: Option<i64>,

        /// Derive the calorie goal from BMR at this activity level
        #[arg(long, value_name = "LEVEL")]
        suggest_calories: Option<String>,
    },

    /// Feed one step-counter reading through the reconciler
    Track {
        /// Cumulative steps for the day
        total_steps: i64,

        /// Steps since the previous reading
        delta_steps: i64,

        /// Milliseconds since the previous reading
        delta_millis: i64,
    },

    /// Today's record and goal progress
    Status,

    /// Weekly totals, averages and change vs the previous week
    Week,

    /// Monthly totals, best day, active days and change vs the previous month
    Month {
        /// Year (defaults to current)
        #[arg(long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to current)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Show or update goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Delete records older than the retention window
    Purge {
        /// Days of history to keep (default from config)
        #[arg(long)]
        keep_days: Option<u32>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Show current goals
    Show,
    /// Update one or more goals
    Set {
        /// Daily step goal
        #[arg(long)]
        steps: Option<i64>,

        /// Daily distance goal (km)
        #[arg(long)]
        distance: Option<f64>,

        /// Daily calorie-burn goal (kcal)
        #[arg(long)]
        calories: Option<i64>,

        /// Daily active-minutes goal
        #[arg(long)]
        active_minutes: Option<i64>,
    },
    /// Print a calorie-goal suggestion from BMR
    Suggest {
        /// Activity level (sedentary/light/moderate/active/very_active)
        #[arg(long)]
        level: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (retention_days, activity_level)
        key: String,
        /// Config value
        value: String,
    },
}
