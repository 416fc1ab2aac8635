// web_app/source/http.rs - Catalog backend over HTTP
//
// GET {base_url}/books[?filter=<category>]
// The response is a JSON array of { "books": Book, "ratings": [Rating] }.

use async_trait::async_trait;

use super::BookSource;
use crate::web_app::config::CatalogConfig;
use crate::web_app::errors::LoadError;
use crate::web_app::model::BookWithRatings;

/// Reads books from the catalog backend.
#[derive(Debug, Clone)]
pub struct HttpBookSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookSource {
    /// Create a source for `base_url` with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a source from configuration.
    ///
    /// Returns `Ok(None)` when no backend URL is configured.
    ///
    /// # Errors
    ///
    /// - `LoadError::Transport` - If the HTTP client could not be built
    pub fn from_config(config: &CatalogConfig) -> Result<Option<Self>, LoadError> {
        let Some(base_url) = config.api_url.as_deref() else {
            return Ok(None);
        };

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| LoadError::Transport {
            reason: format!("HTTP client setup failed: {e}"),
        })?;

        Ok(Some(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }))
    }

    /// Endpoint the books are read from
    pub fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }
}

#[async_trait]
impl BookSource for HttpBookSource {
    async fn fetch_books(&self, filter: Option<&str>) -> Result<Vec<BookWithRatings>, LoadError> {
        let mut request = self.client.get(self.books_url());
        if let Some(category) = filter {
            request = request.query(&[("filter", category)]);
        }

        let response = request.send().await.map_err(|e| LoadError::Transport {
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Catalog returned {} for filter={:?}", status, filter);
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let books: Vec<BookWithRatings> = response.json().await.map_err(|e| LoadError::Decode {
            reason: e.to_string(),
        })?;

        tracing::debug!("Catalog returned {} books for filter={:?}", books.len(), filter);
        Ok(books)
    }
}
