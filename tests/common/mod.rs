// common/mod.rs - Shared test sources for the explore pipeline
//
// Fake BookSource implementations used across test suites:
// 1. RecordingSource - serves the sample catalog and records every filter
// 2. FlakySource - serves the sample catalog until told to fail
// 3. GatedSource - holds back chosen categories until released

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bookwise_explore::web_app::errors::LoadError;
use bookwise_explore::web_app::model::BookWithRatings;
use bookwise_explore::web_app::source::{BookSource, StaticBookSource};
use tokio::sync::oneshot;

/// Serves the sample catalog and remembers which filters were requested
#[derive(Default)]
pub struct RecordingSource {
    inner: StaticBookSource,
    calls: Mutex<Vec<Option<String>>>,
}

impl RecordingSource {
    pub fn sample() -> Self {
        Self {
            inner: StaticBookSource::sample(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Filters received so far, in call order
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookSource for RecordingSource {
    async fn fetch_books(&self, filter: Option<&str>) -> Result<Vec<BookWithRatings>, LoadError> {
        self.calls.lock().unwrap().push(filter.map(str::to_string));
        self.inner.fetch_books(filter).await
    }
}

/// Serves the sample catalog until `fail()` is called
pub struct FlakySource {
    inner: StaticBookSource,
    failing: AtomicBool,
}

impl FlakySource {
    pub fn sample() -> Self {
        Self {
            inner: StaticBookSource::sample(),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookSource for FlakySource {
    async fn fetch_books(&self, filter: Option<&str>) -> Result<Vec<BookWithRatings>, LoadError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(LoadError::Status { status: 503 });
        }
        self.inner.fetch_books(filter).await
    }
}

/// Serves the sample catalog, but a request for a gated category waits
/// until its sender fires
pub struct GatedSource {
    inner: StaticBookSource,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl GatedSource {
    pub fn sample() -> Self {
        Self {
            inner: StaticBookSource::sample(),
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Hold back the next request for `category`; send on the returned
    /// channel to let it through
    pub fn gate(&self, category: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(category.to_string(), rx);
        tx
    }
}

#[async_trait]
impl BookSource for GatedSource {
    async fn fetch_books(&self, filter: Option<&str>) -> Result<Vec<BookWithRatings>, LoadError> {
        let gate = filter.and_then(|category| self.gates.lock().unwrap().remove(category));
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.inner.fetch_books(filter).await
    }
}
