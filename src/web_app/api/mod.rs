// web_app/api/mod.rs - API module for server-side logic
//
// This module holds the catalog source the server functions read from.

pub mod registry;
