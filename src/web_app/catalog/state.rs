// web_app/catalog/state.rs - Explore page state and request sequencing
//
// Every load is tagged with a sequence number. Only the completion of the
// most recently issued load may touch `books` or `is_loading`; anything
// older is dropped, whatever order the responses arrive in.

use crate::web_app::errors::LoadError;
use crate::web_app::model::{BookWithAverage, ExploreQuery};

/// State of the explore page
#[derive(Clone, Debug, PartialEq)]
pub struct ExploreState {
    /// Books on screen, in backend order
    pub books: Vec<BookWithAverage>,
    pub is_loading: bool,
    /// Selected category; empty means no filter
    pub filter_selected: String,
    /// Search text; empty means no narrowing
    pub search: String,
    latest: u64,
}

impl Default for ExploreState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            // The first load starts as soon as the page mounts
            is_loading: true,
            filter_selected: String::new(),
            search: String::new(),
            latest: 0,
        }
    }
}

/// Handle for one in-flight load
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub query: ExploreQuery,
}

/// What happened when a load completed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Books were replaced with this many entries
    Applied(usize),
    /// The load failed; previous books were kept
    Failed,
    /// A newer load was issued meanwhile; the result was dropped
    Stale,
}

impl ExploreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inputs as a query
    pub fn query(&self) -> ExploreQuery {
        ExploreQuery::new(self.filter_selected.clone(), self.search.clone())
    }

    /// Sequence number of the most recent load
    pub fn latest_seq(&self) -> u64 {
        self.latest
    }

    /// Start a load for the current inputs
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        self.is_loading = true;

        LoadTicket {
            seq: self.latest,
            query: self.query(),
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Apply the result of the load identified by `ticket`
    pub fn finish_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<BookWithAverage>, LoadError>,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Dropping stale load #{} (latest is #{})",
                ticket.seq,
                self.latest
            );
            return LoadOutcome::Stale;
        }

        self.is_loading = false;

        match result {
            Ok(books) => {
                let count = books.len();
                self.books = books;
                LoadOutcome::Applied(count)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load books (filter={:?}, search={:?}): {}",
                    ticket.query.filter,
                    ticket.query.search,
                    e
                );
                LoadOutcome::Failed
            }
        }
    }
}
