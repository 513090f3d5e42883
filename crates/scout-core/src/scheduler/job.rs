//! Body of one detail job thread.

use std::sync::Arc;

use crate::model::Record;

use super::pool::Shared;
use super::table::JobTicket;

/// Reports completion when dropped, so a panicking fetch still releases its slot.
struct CompletionGuard<'a> {
    shared: &'a Shared,
    ticket: JobTicket,
    reported: bool,
}

impl CompletionGuard<'_> {
    fn finish(mut self, record: Option<Record>) {
        self.reported = true;
        self.shared.report_completion(self.ticket, record);
    }
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        if !self.reported {
            self.shared.report_completion(self.ticket, None);
        }
    }
}

pub(super) fn run_detail_job(shared: Arc<Shared>, ticket: JobTicket) {
    let guard = CompletionGuard {
        shared: &shared,
        ticket,
        reported: false,
    };
    let url = shared.detail_url_for(ticket.item_id());
    let record = match shared.source.fetch_record(&url) {
        Ok(record) => Some(record),
        Err(e) => {
            shared.stats.record_fetch_failure();
            tracing::warn!(item_id = ticket.item_id(), error = %e, "detail fetch failed");
            None
        }
    };
    guard.finish(record);
}
