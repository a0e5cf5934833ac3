// ABOUTME: Mindful CLI - command-line front end for the analytics and coaching engine
// ABOUTME: Loads a JSON snapshot and prints summaries, insights, advice, and goals as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Moving averages and weight trend over the last 30 days
//! mindful-cli --data snapshot.json summary
//!
//! # Weekly behavioral insights
//! mindful-cli --data snapshot.json insights --lookback 7
//!
//! # Reproducible tip selection
//! mindful-cli --data snapshot.json tip --seed 42
//!
//! # Coach advice for a fixed date, with today's completed actions marked
//! mindful-cli --data snapshot.json --today 2024-03-01 advice
//!
//! # Snapshot path from the environment
//! MINDFUL_DATA_PATH=snapshot.json mindful-cli goals
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mindful_coach::config::environment::parse_date;
use mindful_coach::config::CliEnvironment;
use mindful_coach::errors::AppError;
use mindful_coach::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use commands::CommandContext;

#[derive(Parser)]
#[command(
    name = "mindful-cli",
    about = "Mindful Coach analytics CLI",
    long_about = "Runs the habit and nutrition analytics engine over a JSON data snapshot and prints the results as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file (defaults to MINDFUL_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Local date to evaluate as today, YYYY-MM-DD (defaults to MINDFUL_TODAY, then the system date)
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Lookback window in days (each command has its own default)
    #[arg(long, global = true)]
    lookback: Option<usize>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Calorie and mindfulness moving averages, weight trend, and forecast
    Summary,

    /// Behavioral insights for the recent window
    Insights,

    /// Eating trigger frequencies, foods, and alternatives
    Triggers,

    /// A personalized coaching tip based on recent insights
    Tip {
        /// Seed for reproducible selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Mindful eating prompts for each meal phase
    Prompts,

    /// Coach ratios and persona tags
    Coach,

    /// Coach advice with recommended actions
    Advice,

    /// Status of profile goals
    Goals,

    /// BMR, TDEE, and macro targets for the profile
    Targets,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn run(cli: Cli) -> Result<()> {
    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    if matches!(cli.command, Command::Prompts) {
        return commands::prompts();
    }

    let environment = CliEnvironment::from_env()?;
    let path = environment.resolve_data_path(cli.data)?;
    let context = CommandContext::load(&path, cli.today.or(environment.today), cli.lookback)?;
    info!(path = %path.display(), today = %context.today, "Running command");

    match cli.command {
        Command::Summary => commands::summary(&context),
        Command::Insights => commands::insights(&context),
        Command::Triggers => commands::triggers(&context),
        Command::Tip { seed } => commands::tip(&context, seed),
        Command::Prompts => commands::prompts(),
        Command::Coach => commands::coach(&context),
        Command::Advice => commands::advice(&context),
        Command::Goals => commands::goals(&context),
        Command::Targets => commands::targets(&context),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("Error: {e:#}");
            let status = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(status as u8)
        }
    }
}
