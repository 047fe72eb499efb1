//! Game controller: deals new boards and routes reveals to the live one.

use derive_more::{Display, Error, From};
use futures::future::try_join_all;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::board::{
    Board, BoardError, BoardModel, BoardSampler, BoardSnapshot, Category,
    InsufficientPoolError, NUM_CATEGORIES, QUESTIONS_PER_CATEGORY, RenderInstruction,
};
use crate::provider::{CategoryProvider, ProviderError};

/// Failure to deal a new board. The previous board is left untouched.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SetupError {
    /// The provider could not list or fetch categories.
    #[display("Setup failed: {_0}")]
    Provider(ProviderError),

    /// The category list or a category's clues were too small.
    #[display("Setup failed: {_0}")]
    InsufficientPool(InsufficientPoolError),
}

/// Drives game setup and reveal clicks for a host environment.
///
/// Holds at most one live board. [`GameController::start_new_game`] builds the
/// next board off to the side and swaps it in only once it is complete.
#[derive(Debug)]
pub struct GameController<P, R = StdRng> {
    provider: P,
    sampler: BoardSampler<R>,
    model: Option<BoardModel>,
}

impl<P: CategoryProvider> GameController<P, StdRng> {
    /// Creates a controller with no board dealt yet.
    pub fn new(provider: P) -> Self {
        Self::with_sampler(provider, BoardSampler::new())
    }
}

impl<P: CategoryProvider, R: rand::Rng> GameController<P, R> {
    /// Creates a controller around a specific sampler.
    pub fn with_sampler(provider: P, sampler: BoardSampler<R>) -> Self {
        Self {
            provider,
            sampler,
            model: None,
        }
    }

    /// Returns the data provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Whether a ready board is live.
    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    /// Returns the live board, if any.
    pub fn board(&self) -> Option<&Board> {
        self.model.as_ref().map(BoardModel::board)
    }

    /// Deals a fresh board and makes it live.
    ///
    /// Categories keep the order their ids were sampled in, whatever order the
    /// fetches finish in.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the provider fails or any pool is too small.
    /// On error the previous board stays live.
    #[instrument(skip(self))]
    pub async fn start_new_game(&mut self) -> Result<BoardSnapshot, SetupError> {
        info!("Dealing new board");

        let board = match self.deal().await {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, kept_previous = self.is_ready(), "Setup failed");
                return Err(e);
            }
        };

        let model = BoardModel::new(board);
        let snapshot = model.render_snapshot();
        self.model = Some(model);
        info!("Board ready");
        Ok(snapshot)
    }

    /// Reveals the next stage of one clue on the live board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] for coordinates outside the
    /// board, including any coordinate before the first board is dealt.
    #[instrument(skip(self))]
    pub fn handle_reveal(
        &mut self,
        category: usize,
        clue: usize,
    ) -> Result<RenderInstruction, BoardError> {
        match self.model.as_mut() {
            Some(model) => model.reveal(category, clue),
            None => {
                warn!("Reveal with no board dealt");
                Err(BoardError::IndexOutOfRange { category, clue })
            }
        }
    }

    /// Masked view of the live board. Empty before the first deal.
    pub fn render_snapshot(&self) -> BoardSnapshot {
        self.model
            .as_ref()
            .map(BoardModel::render_snapshot)
            .unwrap_or_default()
    }

    async fn deal(&mut self) -> Result<Board, SetupError> {
        let pool = self.provider.list_category_ids().await?;
        let ids = self.sampler.select_category_ids(&pool, NUM_CATEGORIES)?;
        debug!(ids = ?ids, "Fetching categories");

        let raw = try_join_all(ids.iter().map(|&id| self.provider.get_category_clues(id))).await?;

        let mut categories = Vec::with_capacity(raw.len());
        for (id, category) in ids.iter().zip(raw) {
            let clues = self
                .sampler
                .select_clues(&category.clues, QUESTIONS_PER_CATEGORY)
                .inspect_err(|e| {
                    warn!(id = %id, title = %category.title, error = %e, "Category too small")
                })?;
            categories.push(Category::new(category.title, clues));
        }

        Ok(Board::new(categories))
    }
}
