//! Error types shared between the scanner library and the CLI.
//!
//! The `ScanError` enum unifies transport, decoding, configuration and validation
//! failures so the crates can propagate a single error type. Per-ticker fetch
//! failures are logged and degraded by the scanner; only startup problems
//! (configuration, criteria) are expected to reach the user.
use std::io;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type shared by the library and the client.
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level HTTP failure (connection refused, timeout, body read).
    ///
    /// The request URL is stripped before the error is stored, so the API key
    /// carried in the query string never shows up in messages.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The provider answered with a non-success status code.
    #[error("Provider returned {status} for {path}")]
    Status {
        /// Status code of the response.
        status: StatusCode,
        /// Request path, without the query string.
        path: String,
    },

    /// Failure while decoding a JSON response body.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Filter criteria that violate their invariants.
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// Missing or malformed configuration (e.g. no API key).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Http(err.without_url())
    }
}
