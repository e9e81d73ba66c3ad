mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, GoalAction};
use std::process;

use openstride::output;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            age,
            height,
            weight,
            gender,
            steps,
            distance,
            calories,
            active_minutes,
            suggest_calories,
        } => cmd::init::run(
            age,
            height,
            weight,
            &gender,
            steps,
            distance,
            calories,
            active_minutes,
            suggest_calories.as_deref(),
            cli.human,
        ),
        Commands::Track {
            total_steps,
            delta_steps,
            delta_millis,
        } => cmd::track::run(total_steps, delta_steps, delta_millis, cli.date, cli.human),
        Commands::Status => cmd::status::run(cli.date, cli.human),
        Commands::Week => cmd::week::run(cli.date, cli.human),
        Commands::Month { year, month } => cmd::month::run(year, month, cli.human),
        Commands::Goal { action } => match action {
            GoalAction::Show => cmd::goal::run_show(cli.human),
            GoalAction::Set {
                steps,
                distance,
                calories,
                active_minutes,
            } => cmd::goal::run_set(steps, distance, calories, active_minutes, cli.human),
            GoalAction::Suggest { level } => cmd::goal::run_suggest(level.as_deref(), cli.human),
        },
        Commands::Purge { keep_days } => cmd::purge::run(keep_days, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
    };

    if let Err(e) = result {
        let err = output::error("", "general_error", &e.to_string());
        eprintln!("{}", serde_json::to_string(&err).unwrap());
        process::exit(1);
    }
}
