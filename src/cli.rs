//! Command-line interface for jeopardy.

use clap::{Parser, Subcommand};

/// Jeopardy - trivia board in the terminal
#[derive(Parser, Debug)]
#[command(name = "jeopardy")]
#[command(about = "Trivia board dealt from a jService-compatible API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "jeopardy.toml")]
        config: std::path::PathBuf,

        /// Override the clue API base URL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Deal one board and print it without revealing anything
    Deal {
        /// Path to the TOML config file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "jeopardy.toml")]
        config: std::path::PathBuf,

        /// Override the clue API base URL
        #[arg(long)]
        api_url: Option<String>,

        /// Print the board as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
