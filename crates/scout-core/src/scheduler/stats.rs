//! Counters for one pipeline run.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Run-wide counters, updated from the walker and from job threads.
#[derive(Debug, Default)]
pub struct RunStats {
    pages_fetched: AtomicU64,
    page_failures: AtomicU64,
    jobs_admitted: AtomicU64,
    admissions_dropped: AtomicU64,
    fetch_failures: AtomicU64,
    validation_rejections: AtomicU64,
    records_offered: AtomicU64,
    peak_in_flight: AtomicU64,
}

/// Point-in-time copy of `RunStats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub pages_fetched: u64,
    pub page_failures: u64,
    pub jobs_admitted: u64,
    pub admissions_dropped: u64,
    pub fetch_failures: u64,
    pub validation_rejections: u64,
    pub records_offered: u64,
    pub peak_in_flight: u64,
}

impl RunStats {
    pub fn record_page(&self) {
        self.pages_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_page_failure(&self) {
        self.page_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_admitted(&self, in_flight: usize) {
        self.jobs_admitted.fetch_add(1, Ordering::Relaxed);
        self.peak_in_flight
            .fetch_max(in_flight as u64, Ordering::Relaxed);
    }

    pub(super) fn record_dropped(&self) {
        self.admissions_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_fetch_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn record_offered(&self) {
        self.records_offered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pages_fetched: self.pages_fetched.load(Ordering::Relaxed),
            page_failures: self.page_failures.load(Ordering::Relaxed),
            jobs_admitted: self.jobs_admitted.load(Ordering::Relaxed),
            admissions_dropped: self.admissions_dropped.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            validation_rejections: self.validation_rejections.load(Ordering::Relaxed),
            records_offered: self.records_offered.load(Ordering::Relaxed),
            peak_in_flight: self.peak_in_flight.load(Ordering::Relaxed),
        }
    }
}
