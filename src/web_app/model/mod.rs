// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the catalog backend, the server functions
// and the hydrated page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Book record as returned by the catalog backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub total_pages: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A single rating submitted against a book
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub rate: i32,
    #[serde(default)]
    pub description: String,
    pub book_id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry of the `/books` response: a book joined with its ratings.
///
/// The backend names the book field `books`, so the wire name is kept
/// while the Rust field reads as a single record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookWithRatings {
    #[serde(rename = "books")]
    pub book: Book,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

/// Book plus its derived average rating
///
/// `average` is `None` when the book has no ratings yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookWithAverage {
    #[serde(flatten)]
    pub book: Book,
    pub average: Option<i32>,
}

impl BookWithAverage {
    pub fn id(&self) -> Uuid {
        self.book.id
    }
}

/// Snapshot of the inputs that drive one load of the explore page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreQuery {
    /// Selected category; empty means no filter
    pub filter: String,
    /// Free-text search; empty means no narrowing
    pub search: String,
}

impl ExploreQuery {
    pub fn new(filter: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            search: search.into(),
        }
    }

    /// The category filter to send to the catalog, if any
    pub fn category(&self) -> Option<&str> {
        if self.filter.is_empty() {
            None
        } else {
            Some(self.filter.as_str())
        }
    }
}

/// Category shown by the filter selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Label rendered on the chip
    pub label: &'static str,
    /// Value sent as `filter`; empty selects every book
    pub value: &'static str,
}

/// Categories offered on the explore page, in display order
pub const CATEGORIES: &[Category] = &[
    Category { label: "Tudo", value: "" },
    Category { label: "Computação", value: "Computação" },
    Category { label: "Educação", value: "Educação" },
    Category { label: "Fantasia", value: "Fantasia" },
    Category { label: "Ficção científica", value: "Ficção científica" },
    Category { label: "Horror", value: "Horror" },
    Category { label: "HQs", value: "HQs" },
    Category { label: "Suspense", value: "Suspense" },
];
