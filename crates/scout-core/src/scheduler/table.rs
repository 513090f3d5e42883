//! In-flight job table: one owned thread handle per running detail job.

use std::collections::HashMap;
use std::thread::JoinHandle;

/// Identifies one admitted detail job. Duplicate item ids get distinct
/// tickets, so each admission owns its own table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobTicket {
    seq: u64,
    item_id: i64,
}

impl JobTicket {
    pub fn item_id(&self) -> i64 {
        self.item_id
    }
}

#[derive(Debug, Default)]
pub(super) struct JobTable {
    jobs: HashMap<JobTicket, JoinHandle<()>>,
    next_seq: u64,
}

impl JobTable {
    pub(super) fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Allocate the ticket for the next admission.
    pub(super) fn next_ticket(&mut self, item_id: i64) -> JobTicket {
        let seq = self.next_seq;
        self.next_seq += 1;
        JobTicket { seq, item_id }
    }

    pub(super) fn insert(&mut self, ticket: JobTicket, handle: JoinHandle<()>) {
        self.jobs.insert(ticket, handle);
    }

    pub(super) fn remove(&mut self, ticket: JobTicket) -> Option<JoinHandle<()>> {
        self.jobs.remove(&ticket)
    }

    /// Hand over every handle, leaving the table empty.
    pub(super) fn take_all(&mut self) -> Vec<(JobTicket, JoinHandle<()>)> {
        self.jobs.drain().collect()
    }
}
