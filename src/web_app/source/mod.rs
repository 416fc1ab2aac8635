// web_app/source/mod.rs - Catalog read contract and its implementations
//
// The explore pipeline never talks to a global API client. It receives a
// BookSource, so the aggregation logic runs the same against the real
// backend, the server function bridge, or an in-memory catalog.
//
// Implementations:
// - StaticBookSource: in-memory fixtures (demo mode, tests)
// - HttpBookSource: the catalog backend over HTTP (server only)
// - ServerFnBookSource: the get_books server function (client and server)

use async_trait::async_trait;

use crate::fixtures::{CatalogEntry, CatalogFixture, SampleCatalog};
use crate::web_app::errors::LoadError;
use crate::web_app::model::BookWithRatings;

#[cfg(feature = "client-tools")]
pub mod http;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fn;

#[cfg(feature = "client-tools")]
pub use http::HttpBookSource;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use server_fn::ServerFnBookSource;

/// Read access to the book catalog.
///
/// Returns books joined with their ratings, in backend order, optionally
/// constrained to one category.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait BookSource: Send + Sync {
    /// Fetch every book, or only those in `filter` when it is set.
    ///
    /// # Errors
    /// Any failure is a `LoadError`; callers treat all variants as
    /// "load failed".
    async fn fetch_books(&self, filter: Option<&str>) -> Result<Vec<BookWithRatings>, LoadError>;
}

/// In-memory catalog
#[derive(Clone, Debug, Default)]
pub struct StaticBookSource {
    entries: Vec<CatalogEntry>,
}

impl StaticBookSource {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The built-in sample catalog
    pub fn sample() -> Self {
        Self::new(SampleCatalog::entries())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl BookSource for StaticBookSource {
    async fn fetch_books(&self, filter: Option<&str>) -> Result<Vec<BookWithRatings>, LoadError> {
        let books: Vec<BookWithRatings> = self
            .entries
            .iter()
            .filter(|entry| filter.map_or(true, |category| entry.in_category(category)))
            .map(|entry| entry.record.clone())
            .collect();

        tracing::debug!("Static catalog: filter={:?}, {} books", filter, books.len());
        Ok(books)
    }
}
