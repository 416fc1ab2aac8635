// web_app/source/server_fn.rs - Catalog reads through the get_books server function
//
// On the client this becomes an HTTP POST to /api; on the server the call
// runs the function body directly.

use async_trait::async_trait;

use super::BookSource;
use crate::web_app::errors::LoadError;
use crate::web_app::model::BookWithRatings;
use crate::web_app::server_fns::get_books;

#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnBookSource;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl BookSource for ServerFnBookSource {
    async fn fetch_books(&self, filter: Option<&str>) -> Result<Vec<BookWithRatings>, LoadError> {
        get_books(filter.map(str::to_string))
            .await
            .map_err(|e| LoadError::Server {
                reason: e.to_string(),
            })
    }
}
