// web_app/api/error.rs - Catalog API error taxonomy
//
// Every variant is a "network failure" from the storefront's point of view:
// callers log it and keep showing whatever state they already had.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured base URL cannot carry path segments.
    #[error("invalid catalog base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never produced a response (DNS, connection, CORS...).
    #[error("catalog request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("could not decode catalog response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
