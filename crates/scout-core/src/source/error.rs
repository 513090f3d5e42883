//! Fetch error type shared by all record sources.

use thiserror::Error;

/// A page or detail record could not be retrieved or decoded.
/// Never fatal to a run: the walker or scheduler logs it and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// HTTP response had a non-2xx status.
    #[error("{url}: HTTP {status}")]
    Http { url: String, status: u32 },
    /// Body was not the JSON shape we expected.
    #[error("{url}: decode: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Static source has nothing registered under this URL.
    #[error("{url}: no such entry")]
    Missing { url: String },
}
