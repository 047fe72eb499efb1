//! Jeopardy - Unified CLI
//!
//! Terminal trivia board dealt from a jService-compatible API.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use jeopardy::{GameController, JServiceClient, TriviaConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, api_url } => {
            let config = load_config(&config, api_url)?;
            tui::run_tui(config).await
        }
        Command::Deal {
            config,
            api_url,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::io::stderr)
                .init();
            let config = load_config(&config, api_url)?;
            run_deal(config, json).await
        }
    }
}

/// Loads the config file (or defaults) and applies URL overrides.
fn load_config(path: &std::path::Path, api_url: Option<String>) -> Result<TriviaConfig> {
    Ok(TriviaConfig::load_or_default(path)?.with_overrides(api_url))
}

/// Deal a single board and print its masked snapshot.
#[instrument(skip(config), fields(api_base_url = %config.api_base_url()))]
async fn run_deal(config: TriviaConfig, json: bool) -> Result<()> {
    info!("Dealing a board");

    let provider = JServiceClient::from_config(&config)?;
    let mut controller = GameController::new(provider);
    let snapshot = controller.start_new_game().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{snapshot}");
    }

    Ok(())
}
