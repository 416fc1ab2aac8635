// fixtures/mod.rs - Sample catalog fixtures
//
// A fixture is reusable sample data. Instead of hand-building books and
// ratings in every test, we describe the catalog once and reuse it:
// - tests use it as the fake backend behind StaticBookSource
// - the server falls back to it when no catalog URL is configured
//
// Each fixture is a struct implementing CatalogFixture.

pub mod catalog;

pub use catalog::SampleCatalog;

use crate::web_app::model::BookWithRatings;

/// A book as stored in a fixture: the wire record plus the categories it
/// belongs to, so in-memory sources can honour the category filter.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub categories: Vec<String>,
    pub record: BookWithRatings,
}

impl CatalogEntry {
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// A simple trait that all catalog fixtures must implement
pub trait CatalogFixture {
    /// The entries of this catalog, in the order the backend returns them
    fn entries() -> Vec<CatalogEntry>;
}
