//! Category providers: where boards get their categories and clues.

mod error;
mod jservice;
mod types;

pub use error::ProviderError;
pub use jservice::JServiceClient;
pub use types::{CategoryId, RawCategory, RawClue};

/// Source of trivia categories and their clue pools.
#[async_trait::async_trait]
pub trait CategoryProvider: Send + Sync {
    /// Lists the ids of every category available for sampling.
    async fn list_category_ids(&self) -> Result<Vec<CategoryId>, ProviderError>;

    /// Fetches a category's title and full clue pool.
    async fn get_category_clues(&self, id: CategoryId) -> Result<RawCategory, ProviderError>;
}
