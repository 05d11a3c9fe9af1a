//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / io::Error / serde_json::Error                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← adds the URL / path                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_catalog() logs it and hands back an EMPTY catalog                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures while obtaining the product list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP client could not be constructed (TLS backend, bad timeout).
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout, truncated body.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// Catalog file missing or unreadable.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Body was not a JSON array.
    #[error("Catalog payload is not a JSON array: {0}")]
    Payload(#[from] serde_json::Error),
}
