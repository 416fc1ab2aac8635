// web_app/api/registry.rs - Process-wide catalog source
//
// The server binary registers the source once at startup. Server functions
// prefer a source provided through Leptos context and only fall back here.

use std::sync::{Arc, Mutex, OnceLock};

use crate::web_app::source::BookSource;

/// Shared handle to a catalog source
pub type SharedBookSource = Arc<dyn BookSource>;

static SOURCE: OnceLock<SharedBookSource> = OnceLock::new();
static TEST_SOURCE_OVERRIDE: Mutex<Option<SharedBookSource>> = Mutex::new(None);

/// Register the global catalog source
pub fn init_source(source: SharedBookSource) {
    tracing::info!("Initializing global catalog source");
    if SOURCE.set(source).is_err() {
        tracing::warn!("Catalog source already initialized");
    } else {
        tracing::info!("Global catalog source initialized successfully");
    }
}

/// Set a source override for testing
pub fn set_test_source(source: SharedBookSource) {
    let mut guard = TEST_SOURCE_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(source);
}

/// Remove the test override
pub fn clear_test_source() {
    let mut guard = TEST_SOURCE_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = None;
}

/// Get the global catalog source
pub fn get_source() -> Option<SharedBookSource> {
    // Check for test override first
    {
        let guard = TEST_SOURCE_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref source) = *guard {
            return Some(Arc::clone(source));
        }
    }

    let source = SOURCE.get().cloned();
    if source.is_none() {
        tracing::warn!("Global catalog source is empty!");
    }
    source
}
