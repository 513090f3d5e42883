//! Sequential pagination that feeds item ids to the scheduler.

use std::sync::Arc;

use crate::config::{self, ScoutConfig};
use crate::scheduler::{JobScheduler, SchedulerError};
use crate::source::{FetchError, RecordSource};

/// What a finished walk saw.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub pages: usize,
    pub items: usize,
    /// Set when a page fetch failed and the walk stopped early.
    pub page_error: Option<FetchError>,
}

/// Fetches one page at a time, admits a detail job per item, follows
/// continuation tokens, and drains the scheduler when the listing ends.
pub struct PageWalker<'a> {
    source: Arc<dyn RecordSource>,
    scheduler: &'a JobScheduler,
    list_url: String,
    token_param: String,
}

impl<'a> PageWalker<'a> {
    pub fn new(
        source: Arc<dyn RecordSource>,
        scheduler: &'a JobScheduler,
        list_url: impl Into<String>,
        token_param: impl Into<String>,
    ) -> Self {
        Self {
            source,
            scheduler,
            list_url: list_url.into(),
            token_param: token_param.into(),
        }
    }

    pub fn from_config(
        cfg: &ScoutConfig,
        source: Arc<dyn RecordSource>,
        scheduler: &'a JobScheduler,
    ) -> Self {
        Self::new(source, scheduler, &cfg.list_url, &cfg.token_param)
    }

    /// Walk every page, then drain. A failed page fetch ends discovery but
    /// jobs already admitted are still drained. The scheduler has always
    /// been drained when this returns, error or not.
    pub fn walk(&self) -> Result<WalkSummary, SchedulerError> {
        let mut summary = WalkSummary::default();
        let result = self.walk_pages(&mut summary);
        self.scheduler.drain();
        result.map(|()| summary)
    }

    fn walk_pages(&self, summary: &mut WalkSummary) -> Result<(), SchedulerError> {
        let stats = self.scheduler.stats();
        let mut url = self.list_url.clone();
        loop {
            let page = match self.source.fetch_page(&url) {
                Ok(page) => page,
                Err(e) => {
                    stats.record_page_failure();
                    tracing::warn!(url = %url, error = %e, "page fetch failed, stopping walk");
                    summary.page_error = Some(e);
                    return Ok(());
                }
            };
            stats.record_page();
            summary.pages += 1;
            summary.items += page.item_ids.len();
            tracing::debug!(
                url = %url,
                items = page.item_ids.len(),
                has_next = page.next_token().is_some(),
                "fetched page"
            );

            for &item_id in &page.item_ids {
                self.scheduler.admit(item_id)?;
            }

            match page.next_token() {
                Some(token) => {
                    url = config::continuation_url(&self.list_url, &self.token_param, token)
                }
                None => return Ok(()),
            }
        }
    }
}
