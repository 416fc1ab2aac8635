// web_app/catalog/mod.rs - Explore page logic, independent of the UI
//
// - aggregate.rs: average ratings and search narrowing (pure functions)
// - state.rs: page state and request sequencing
// - explorer.rs: the load pipeline driven against an injected BookSource
//
// The Leptos page and the tests both go through these types, so everything
// the page does with data can be exercised without a browser or a network.

pub mod aggregate;
pub mod explorer;
pub mod state;

pub use aggregate::{
    aggregate, average_rating, filled_stars, load_books, matches_search, narrow_by_search,
    rating_label, MAX_STARS, NO_RATINGS_LABEL,
};
pub use explorer::Explorer;
pub use state::{ExploreState, LoadOutcome, LoadTicket};
