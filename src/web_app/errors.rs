// web_app/errors.rs - Error types for the explore page
//
// Every LoadError variant means the same thing to the page ("load failed");
// the variants only exist so the log line says where it failed.

use thiserror::Error;

/// Errors that can occur while loading the book catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("Catalog request failed: {reason}")]
    Transport {
        /// The reason reported by the HTTP client
        reason: String,
    },

    /// The catalog answered with a non-success status code.
    #[error("Catalog responded with status {status}")]
    Status {
        /// The HTTP status code
        status: u16,
    },

    /// The response body was not a list of books with ratings.
    #[error("Catalog response could not be decoded: {reason}")]
    Decode {
        /// The reason reported by the decoder
        reason: String,
    },

    /// The server function failed.
    #[error("Server function failed: {reason}")]
    Server {
        /// The error message returned by the server
        reason: String,
    },

    /// No catalog source is registered on the server.
    #[error("Catalog source not available")]
    Unavailable,
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue {
        /// The environment variable name
        key: &'static str,
        /// The raw value that was rejected
        value: String,
    },
}
