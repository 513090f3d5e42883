//! In-memory source serving canned pages and records.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::model::{Page, Record};

use super::{FetchError, RecordSource};

/// Serves pages and records registered under exact URLs, optionally after a
/// fixed artificial delay. Counts fetches and tracks how many detail fetches were
/// running at once.
#[derive(Debug, Default)]
pub struct StaticSource {
    pages: HashMap<String, Page>,
    records: HashMap<String, Record>,
    default_latency: Duration,
    page_fetches: AtomicUsize,
    record_fetches: AtomicUsize,
    active_records: AtomicUsize,
    peak_active_records: AtomicUsize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, page: Page) -> Self {
        self.pages.insert(url.into(), page);
        self
    }

    pub fn with_record(mut self, url: impl Into<String>, record: Record) -> Self {
        self.records.insert(url.into(), record);
        self
    }

    /// Delay applied to every fetch.
    pub fn with_default_latency(mut self, delay: Duration) -> Self {
        self.default_latency = delay;
        self
    }

    pub fn page_fetches(&self) -> usize {
        self.page_fetches.load(Ordering::SeqCst)
    }

    pub fn record_fetches(&self) -> usize {
        self.record_fetches.load(Ordering::SeqCst)
    }

    /// Highest number of `fetch_record` calls observed in progress together.
    pub fn peak_concurrent_records(&self) -> usize {
        self.peak_active_records.load(Ordering::SeqCst)
    }

    fn pause(&self) {
        if !self.default_latency.is_zero() {
            std::thread::sleep(self.default_latency);
        }
    }
}

fn missing(url: &str) -> FetchError {
    FetchError::Missing {
        url: url.to_string(),
    }
}

impl RecordSource for StaticSource {
    fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        self.page_fetches.fetch_add(1, Ordering::SeqCst);
        self.pause();
        self.pages.get(url).cloned().ok_or_else(|| missing(url))
    }

    fn fetch_record(&self, url: &str) -> Result<Record, FetchError> {
        self.record_fetches.fetch_add(1, Ordering::SeqCst);
        let now = self.active_records.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_active_records.fetch_max(now, Ordering::SeqCst);
        self.pause();
        let result = self.records.get(url).cloned().ok_or_else(|| missing(url));
        self.active_records.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
