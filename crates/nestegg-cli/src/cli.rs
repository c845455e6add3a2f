//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nestegg - Score your month of spending, saving and goals
#[derive(Parser)]
#[command(name = "nestegg")]
#[command(about = "Financial behavior score on a -3..+3 band", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the data dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the score for a snapshot
    Score {
        /// Snapshot JSON file (purchases, savings, goals, targets)
        #[arg(short, long)]
        input: PathBuf,

        /// Anchor date for "this month" (YYYY-MM-DD or RFC 3339, default now)
        #[arg(long)]
        as_of: Option<String>,

        /// Override the monthly spending target
        #[arg(long)]
        monthly_spend: Option<f64>,

        /// Reject invalid input instead of scoring it
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how one more purchase would move the score
    Impact {
        /// Snapshot JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Purchase amount in dollars (e.g., 42.50)
        #[arg(short, long)]
        amount: f64,

        /// Purchase category
        #[arg(short, long)]
        category: Option<String>,

        /// Purchase time (YYYY-MM-DD or RFC 3339, default: --as-of)
        #[arg(long)]
        at: Option<String>,

        /// Anchor date for "this month" (YYYY-MM-DD or RFC 3339, default now)
        #[arg(long)]
        as_of: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show goal progress derived from this month's category spending
    Goals {
        /// Snapshot JSON file with goal_definitions
        #[arg(short, long)]
        input: PathBuf,

        /// Anchor date for "this month" (YYYY-MM-DD or RFC 3339, default now)
        #[arg(long)]
        as_of: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the active configuration as TOML
    Show,
    /// Print the config override path
    Path,
}
