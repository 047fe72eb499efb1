//! Tests for dealing boards and routing reveals through the controller.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use jeopardy::{
    BoardError, BoardSampler, CategoryId, CategoryProvider, CellView, GameController,
    InsufficientPoolError, NUM_CATEGORIES, ProviderError, QUESTIONS_PER_CATEGORY, RawCategory,
    RawClue, RenderInstruction, SetupError,
};

/// In-memory provider with optional failure injection.
#[derive(Debug, Default)]
struct FakeProvider {
    categories: HashMap<CategoryId, RawCategory>,
    fail_listing: bool,
    /// Fail the n-th category fetch (1-based).
    fail_on_fetch: Option<usize>,
    /// Delay each fetch so that later ids finish first.
    staggered: bool,
    fetches: AtomicUsize,
    requested: Mutex<Vec<CategoryId>>,
}

impl FakeProvider {
    /// `count` categories titled "Category N", each with `clues` clues.
    fn with_categories(count: u64, clues: usize) -> Self {
        let categories = (1..=count)
            .map(|id| {
                let pool = (0..clues)
                    .map(|i| RawClue::new(format!("Q{id}.{i}"), format!("A{id}.{i}")))
                    .collect();
                (CategoryId::new(id), RawCategory::new(format!("Category {id}"), pool))
            })
            .collect();
        Self {
            categories,
            ..Self::default()
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn requested(&self) -> Vec<CategoryId> {
        self.requested.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl CategoryProvider for FakeProvider {
    async fn list_category_ids(&self) -> Result<Vec<CategoryId>, ProviderError> {
        if self.fail_listing {
            return Err(ProviderError::new("listing unavailable"));
        }
        let mut ids: Vec<CategoryId> = self.categories.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }

    async fn get_category_clues(&self, id: CategoryId) -> Result<RawCategory, ProviderError> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        self.requested.lock().expect("Lock poisoned").push(id);

        if self.staggered {
            let delay = 5 * (NUM_CATEGORIES as u64 + 1).saturating_sub(n as u64);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.fail_on_fetch == Some(n) {
            return Err(ProviderError::new(format!("fetch {n} failed")));
        }
        self.categories
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::new(format!("no category {id}")))
    }
}

fn controller(provider: FakeProvider) -> GameController<FakeProvider> {
    GameController::with_sampler(provider, BoardSampler::seeded(42))
}

#[tokio::test]
async fn test_start_new_game_deals_full_hidden_board() {
    let mut controller = controller(FakeProvider::with_categories(10, 8));

    let snapshot = controller.start_new_game().await.expect("Setup failed");

    assert!(controller.is_ready());
    let board = controller.board().expect("No board");
    assert!(board.is_full_size());
    assert_eq!(snapshot.columns().len(), NUM_CATEGORIES);
    for column in snapshot.columns() {
        assert_eq!(column.cells().len(), QUESTIONS_PER_CATEGORY);
        assert!(column.cells().iter().all(|c| *c == CellView::Hidden));
    }
}

#[tokio::test]
async fn test_categories_follow_sampled_order() {
    let mut provider = FakeProvider::with_categories(10, 5);
    provider.staggered = true;
    let mut controller = controller(provider);

    controller.start_new_game().await.expect("Setup failed");

    let requested = controller.provider().requested();
    let expected: Vec<String> = requested
        .iter()
        .map(|id| format!("Category {id}"))
        .collect();
    let titles: Vec<String> = controller
        .board()
        .expect("No board")
        .categories()
        .iter()
        .map(|c| c.title().clone())
        .collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn test_clues_come_from_their_category() {
    let mut controller = controller(FakeProvider::with_categories(6, 6));
    controller.start_new_game().await.expect("Setup failed");

    for category in controller.board().expect("No board").categories() {
        let id = category
            .title()
            .trim_start_matches("Category ")
            .to_string();
        for clue in category.clues() {
            assert!(clue.question().starts_with(&format!("Q{id}.")));
        }
    }
}

#[tokio::test]
async fn test_handle_reveal_delegates_to_live_board() {
    let mut controller = controller(FakeProvider::with_categories(6, 5));
    controller.start_new_game().await.expect("Setup failed");

    let clue = controller
        .board()
        .and_then(|b| b.clue(3, 2))
        .cloned()
        .expect("No clue");

    assert_eq!(
        controller.handle_reveal(3, 2),
        Ok(RenderInstruction::Display(clue.question().clone()))
    );
    assert_eq!(
        controller.handle_reveal(3, 2),
        Ok(RenderInstruction::Display(clue.answer().clone()))
    );
    assert_eq!(controller.handle_reveal(3, 2), Ok(RenderInstruction::NoChange));

    assert_eq!(
        controller.render_snapshot().cell(3, 2),
        Some(&CellView::Answer(clue.answer().clone()))
    );
}

#[tokio::test]
async fn test_handle_reveal_out_of_range() {
    let mut controller = controller(FakeProvider::with_categories(6, 5));
    controller.start_new_game().await.expect("Setup failed");

    assert_eq!(
        controller.handle_reveal(NUM_CATEGORIES, 0),
        Err(BoardError::IndexOutOfRange {
            category: NUM_CATEGORIES,
            clue: 0
        })
    );
    assert_eq!(
        controller.handle_reveal(0, QUESTIONS_PER_CATEGORY),
        Err(BoardError::IndexOutOfRange {
            category: 0,
            clue: QUESTIONS_PER_CATEGORY
        })
    );
}

#[test]
fn test_reveal_before_first_deal_fails() {
    let mut controller = controller(FakeProvider::with_categories(6, 5));
    assert!(!controller.is_ready());
    assert!(controller.render_snapshot().is_empty());
    assert!(matches!(
        controller.handle_reveal(0, 0),
        Err(BoardError::IndexOutOfRange { .. })
    ));
}

#[tokio::test]
async fn test_restart_replaces_board_with_fresh_clues() {
    let mut controller = controller(FakeProvider::with_categories(10, 5));
    controller.start_new_game().await.expect("Setup failed");
    controller.handle_reveal(0, 0).expect("Reveal failed");

    let snapshot = controller.start_new_game().await.expect("Setup failed");

    assert_eq!(snapshot.cell(0, 0), Some(&CellView::Hidden));
    assert_eq!(controller.render_snapshot(), snapshot);
}

#[tokio::test]
async fn test_provider_failure_on_third_fetch_keeps_previous_board() {
    // The first deal performs fetches 1 through 6; fail the third of the second deal.
    let mut provider = FakeProvider::with_categories(10, 5);
    provider.fail_on_fetch = Some(NUM_CATEGORIES + 3);
    let mut controller = controller(provider);

    controller.start_new_game().await.expect("Setup failed");
    controller.handle_reveal(1, 1).expect("Reveal failed");
    let before = controller.render_snapshot();
    let board_before = controller.board().cloned();

    let err = controller
        .start_new_game()
        .await
        .expect_err("Third fetch should fail");

    assert!(matches!(err, SetupError::Provider(_)));
    assert!(controller.is_ready());
    assert_eq!(controller.render_snapshot(), before);
    assert_eq!(controller.board().cloned(), board_before);
    assert!(matches!(
        controller.render_snapshot().cell(1, 1),
        Some(CellView::Question(_))
    ));
}

#[tokio::test]
async fn test_first_deal_failure_leaves_no_board() {
    let mut provider = FakeProvider::with_categories(10, 5);
    provider.fail_on_fetch = Some(3);
    let mut controller = controller(provider);

    let err = controller
        .start_new_game()
        .await
        .expect_err("Third fetch should fail");

    assert!(matches!(err, SetupError::Provider(_)));
    assert!(!controller.is_ready());
    assert!(controller.render_snapshot().is_empty());
}

#[tokio::test]
async fn test_listing_failure_is_setup_error() {
    let mut provider = FakeProvider::with_categories(10, 5);
    provider.fail_listing = true;
    let mut controller = controller(provider);

    let err = controller.start_new_game().await.expect_err("Listing should fail");

    assert!(matches!(err, SetupError::Provider(_)));
    assert_eq!(controller.provider().fetch_count(), 0);
}

#[tokio::test]
async fn test_too_few_categories_is_setup_error() {
    let mut controller = controller(FakeProvider::with_categories(5, 5));

    let err = controller.start_new_game().await.expect_err("Pool too small");

    assert!(matches!(
        err,
        SetupError::InsufficientPool(InsufficientPoolError {
            required: NUM_CATEGORIES,
            available: 5
        })
    ));
    assert!(!controller.is_ready());
}

#[tokio::test]
async fn test_thin_category_is_setup_error() {
    let mut provider = FakeProvider::with_categories(6, 5);
    provider
        .categories
        .get_mut(&CategoryId::new(4))
        .expect("Category missing")
        .clues
        .truncate(2);
    let mut controller = controller(provider);

    let err = controller.start_new_game().await.expect_err("Pool too small");

    assert!(matches!(
        err,
        SetupError::InsufficientPool(InsufficientPoolError {
            required: QUESTIONS_PER_CATEGORY,
            available: 2
        })
    ));
    assert!(!controller.is_ready());
}
