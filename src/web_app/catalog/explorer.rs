// web_app/catalog/explorer.rs - Load pipeline over an injected source
//
// Explorer owns the page state and drives the load pipeline against any
// BookSource. The state lock is never held across an await, so several
// loads can be in flight at once; sequencing in ExploreState decides which
// one lands.

use std::sync::{Mutex, MutexGuard};

use super::aggregate::load_books;
use super::state::{ExploreState, LoadOutcome};
use crate::web_app::source::BookSource;

pub struct Explorer<S> {
    source: S,
    state: Mutex<ExploreState>,
}

impl<S> Explorer<S>
where
    S: BookSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(ExploreState::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ExploreState {
        self.lock().clone()
    }

    /// Run the load pipeline for the current inputs
    pub async fn refresh(&self) -> LoadOutcome {
        let ticket = self.lock().begin_load();
        let result = load_books(&self.source, &ticket.query).await;
        self.lock().finish_load(&ticket, result)
    }

    /// Change the category filter and reload
    pub async fn select_filter(&self, filter: impl Into<String>) -> LoadOutcome {
        self.lock().filter_selected = filter.into();
        self.refresh().await
    }

    /// Change the search text and reload
    pub async fn search(&self, search: impl Into<String>) -> LoadOutcome {
        self.lock().search = search.into();
        self.refresh().await
    }

    fn lock(&self) -> MutexGuard<'_, ExploreState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::source::StaticBookSource;

    #[tokio::test]
    async fn test_mount_loads_everything() {
        let explorer = Explorer::new(StaticBookSource::sample());
        assert!(explorer.state().is_loading);

        let outcome = explorer.refresh().await;
        let state = explorer.state();

        assert_eq!(outcome, LoadOutcome::Applied(explorer.source().len()));
        assert!(!state.is_loading);
        assert_eq!(state.books[0].book.name, "O Hobbit");
        assert_eq!(state.books[0].average, Some(5));
    }

    #[tokio::test]
    async fn test_filter_then_search() {
        let explorer = Explorer::new(StaticBookSource::sample());

        explorer.select_filter("Fantasia").await;
        assert_eq!(explorer.state().books.len(), 2);

        explorer.search("Anéis").await;
        let state = explorer.state();
        assert_eq!(state.books.len(), 1);
        assert_eq!(state.books[0].book.name, "O Senhor dos Anéis");
    }
}
