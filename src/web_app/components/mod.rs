// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, StarRating)
// - search.rs: Search box and category filter chips
// - book.rs: Book card and grid
// - layout.rs: Page layout and header icons

pub mod book;
pub mod common;
pub mod layout;
pub mod search;

// Re-export commonly used components for convenience
pub use book::*;
pub use common::*;
pub use layout::*;
pub use search::*;
