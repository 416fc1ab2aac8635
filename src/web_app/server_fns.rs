// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn source() -> Result<crate::web_app::api::registry::SharedBookSource, ServerFnError> {
    use crate::web_app::api::registry::{self, SharedBookSource};

    // First try to get from context (for testing or if manually set)
    if let Some(source) = use_context::<SharedBookSource>() {
        return Ok(source);
    }

    // Then the source registered at startup
    if let Some(source) = registry::get_source() {
        return Ok(source);
    }

    tracing::error!("Catalog source could not be resolved from any source");
    Err(ServerFnError::new(crate::web_app::errors::LoadError::Unavailable.to_string()))
}

/// List books with their ratings, optionally restricted to one category
///
/// Search is never sent here; the page narrows results after aggregation.
#[server(GetBooks, "/api")]
pub async fn get_books(filter: Option<String>) -> Result<Vec<BookWithRatings>, ServerFnError> {
    use crate::web_app::source::BookSource;

    let filter = filter.filter(|f| !f.is_empty());
    tracing::info!("Books request: filter={:?}", filter);

    let source = source()?;
    let result = source.fetch_books(filter.as_deref()).await;

    match &result {
        Ok(books) => tracing::info!("Books request successful: {} books", books.len()),
        Err(e) => tracing::error!("Books request failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Books request failed: {}", e)))
}
