//! Jeopardy library - a trivia board dealt from a remote clue API.
//!
//! # Architecture
//!
//! - **Board**: clues, categories, random sampling and the reveal state machine
//! - **Provider**: where categories and clue pools come from (jService over HTTP)
//! - **Controller**: deals boards and routes reveal clicks to the live board
//! - **Config**: TOML settings for the provider
//!
//! # Example
//!
//! ```no_run
//! use jeopardy::{GameController, JServiceClient, RenderInstruction, TriviaConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let provider = JServiceClient::from_config(&TriviaConfig::default())?;
//! let mut controller = GameController::new(provider);
//!
//! let snapshot = controller.start_new_game().await?;
//! println!("{snapshot}");
//!
//! if let RenderInstruction::Display(text) = controller.handle_reveal(0, 0)? {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod controller;
mod provider;

// Crate-level exports - Board model
pub use board::{
    Board, BoardError, BoardModel, BoardSampler, BoardSnapshot, Category, CellView, Clue,
    ColumnView, HIDDEN_MARKER, InsufficientPoolError, NUM_CATEGORIES, QUESTIONS_PER_CATEGORY,
    RenderInstruction, RevealState,
};

// Crate-level exports - Configuration
pub use config::{API_URL_ENV, ConfigError, TriviaConfig};

// Crate-level exports - Controller
pub use controller::{GameController, SetupError};

// Crate-level exports - Providers
pub use provider::{CategoryId, CategoryProvider, JServiceClient, ProviderError, RawCategory, RawClue};
