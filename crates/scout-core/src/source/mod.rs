//! Record sources: where pages and detail records come from.
//!
//! The core only sees the `RecordSource` trait. `HttpSource` talks to the
//! real listing API through libcurl; `StaticSource` serves canned data from
//! memory for offline runs and tests.

mod error;
mod http;
mod static_source;

pub use error::FetchError;
pub use http::HttpSource;
pub use static_source::StaticSource;

use crate::model::{Page, Record};

/// Blocking retrieval and decoding of pages and detail records.
///
/// Implementations are shared by every detail worker thread, so they must be
/// `Send + Sync`. Output is trusted as-is; no shape validation happens above
/// this layer.
pub trait RecordSource: Send + Sync {
    fn fetch_page(&self, url: &str) -> Result<Page, FetchError>;

    fn fetch_record(&self, url: &str) -> Result<Record, FetchError>;
}
