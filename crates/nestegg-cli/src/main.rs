//! Nestegg CLI - Financial behavior score
//!
//! Usage:
//!   nestegg score --input snapshot.json      Score this month
//!   nestegg impact --input snapshot.json -a 80  Score change from one purchase
//!   nestegg goals --input snapshot.json      Goal progress from category spend
//!   nestegg config show                      Active configuration

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Score {
            input,
            as_of,
            monthly_spend,
            strict,
            json,
        } => commands::cmd_score(
            &commands::ScoreArgs {
                config,
                input: &input,
                as_of: as_of.as_deref(),
                monthly_spend,
                strict,
            },
            json,
        ),
        Commands::Impact {
            input,
            amount,
            category,
            at,
            as_of,
            json,
        } => commands::cmd_impact(
            &commands::ImpactArgs {
                config,
                input: &input,
                amount,
                category: category.as_deref(),
                at: at.as_deref(),
                as_of: as_of.as_deref(),
            },
            json,
        ),
        Commands::Goals {
            input,
            as_of,
            json,
        } => commands::cmd_goals(&input, as_of.as_deref(), json),
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(config),
            Some(ConfigAction::Path) => commands::cmd_config_path(config),
        },
    }
}
