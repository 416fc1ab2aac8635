// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - ExplorePage: browse the catalog by category and search text

pub mod explore;

// Re-export page components
pub use explore::ExplorePage;
