//! Wire types shared by every category provider.

use derive_more::{Display, From};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Provider-assigned category identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From, new,
)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A clue as the provider returns it, before it joins a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct RawClue {
    /// Question text.
    #[new(into)]
    pub question: String,
    /// Answer text.
    #[new(into)]
    pub answer: String,
}

/// A category with its full clue pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct RawCategory {
    /// Category title.
    #[new(into)]
    pub title: String,
    /// Every clue the provider holds for this category.
    #[serde(default)]
    pub clues: Vec<RawClue>,
}
