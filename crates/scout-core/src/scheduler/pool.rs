//! The scheduler itself: admission, completion bookkeeping, drain.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use crate::config::{self, ScoutConfig};
use crate::model::Record;
use crate::phone;
use crate::source::RecordSource;
use crate::topk::TopKSelector;

use super::error::SchedulerError;
use super::job::run_detail_job;
use super::stats::RunStats;
use super::table::{JobTable, JobTicket};

/// Values the scheduler needs from configuration.
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    /// Detail URL prefix; the item id is appended.
    pub detail_url: String,
    /// Maximum jobs in the in-flight table (clamped to at least 1).
    pub max_parallelism: usize,
    /// Capacity of the retained top-K set.
    pub retain: usize,
}

impl From<&ScoutConfig> for SchedulerSettings {
    fn from(cfg: &ScoutConfig) -> Self {
        Self {
            detail_url: cfg.detail_url.clone(),
            max_parallelism: cfg.max_parallelism,
            retain: cfg.retain,
        }
    }
}

/// Outcome of `JobScheduler::admit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// A detail job was started.
    Started(JobTicket),
    /// Drain had already been requested; the item was discarded.
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrainPhase {
    Open,
    Draining,
    Drained,
}

struct State {
    table: JobTable,
    phase: DrainPhase,
    /// Most recently completed job whose entry is still in the table.
    pending_removal: Option<JobTicket>,
    retained: TopKSelector,
}

impl State {
    fn drain_requested(&self) -> bool {
        self.phase != DrainPhase::Open
    }

    fn take_pending(&mut self) -> Option<JoinHandle<()>> {
        let ticket = self.pending_removal.take()?;
        self.table.remove(ticket)
    }
}

/// State shared between the scheduler handle and its job threads.
pub(super) struct Shared {
    pub(super) source: Arc<dyn RecordSource>,
    detail_url: String,
    max_parallelism: usize,
    state: Mutex<State>,
    slot_freed: Condvar,
    drained: Condvar,
    pub(super) stats: RunStats,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn detail_url_for(&self, item_id: i64) -> String {
        config::detail_url(&self.detail_url, item_id)
    }

    /// Bookkeeping for a finished job. `record` is `None` when the fetch failed.
    ///
    /// Runs on the finishing job's own thread, so it only ever removes the
    /// *previous* completion's entry and parks its own ticket as pending.
    pub(super) fn report_completion(&self, ticket: JobTicket, record: Option<Record>) {
        let record = record.filter(|r| {
            let ok = phone::is_valid(&r.phone_number);
            if !ok {
                self.stats.record_rejection();
                tracing::debug!(
                    item_id = ticket.item_id(),
                    number = %r.phone_number,
                    "dropping record with invalid phone number"
                );
            }
            ok
        });

        let reaped = {
            let mut state = self.lock();
            if let Some(record) = record {
                self.stats.record_offered();
                let kept = state.retained.offer(record);
                tracing::trace!(item_id = ticket.item_id(), kept, "offered record");
            }
            if state.drain_requested() {
                None
            } else {
                let reaped = state.take_pending();
                state.pending_removal = Some(ticket);
                // Wake an admitter either way: it can use the freed slot or
                // reap the entry we just parked.
                self.slot_freed.notify_one();
                reaped
            }
        };

        if let Some(handle) = reaped {
            join_job(handle);
        }
    }
}

fn join_job(handle: JoinHandle<()>) {
    if handle.join().is_err() {
        tracing::error!("detail job thread panicked");
    }
}

/// Runs one thread per admitted detail job, at most `max_parallelism` at a time.
pub struct JobScheduler {
    shared: Arc<Shared>,
}

impl JobScheduler {
    pub fn new(source: Arc<dyn RecordSource>, settings: SchedulerSettings) -> Self {
        let max_parallelism = settings.max_parallelism.max(1);
        Self {
            shared: Arc::new(Shared {
                source,
                detail_url: settings.detail_url,
                max_parallelism,
                state: Mutex::new(State {
                    table: JobTable::default(),
                    phase: DrainPhase::Open,
                    pending_removal: None,
                    retained: TopKSelector::new(settings.retain),
                }),
                slot_freed: Condvar::new(),
                drained: Condvar::new(),
                stats: RunStats::default(),
            }),
        }
    }

    /// Entries currently in the in-flight table.
    pub fn in_flight(&self) -> usize {
        self.shared.lock().table.len()
    }

    pub fn is_draining(&self) -> bool {
        self.shared.lock().drain_requested()
    }

    pub fn stats(&self) -> &RunStats {
        &self.shared.stats
    }

    /// Start a detail job for `item_id`, blocking while the table is full.
    /// After drain has been requested this is a no-op returning `Dropped`.
    pub fn admit(&self, item_id: i64) -> Result<Admission, SchedulerError> {
        let shared = &self.shared;
        let mut state = shared.lock();
        loop {
            if state.drain_requested() {
                shared.stats.record_dropped();
                tracing::debug!(item_id, "admission closed, dropping item");
                return Ok(Admission::Dropped);
            }
            if state.table.len() < shared.max_parallelism {
                break;
            }
            if let Some(handle) = state.take_pending() {
                drop(state);
                join_job(handle);
                state = shared.lock();
                continue;
            }
            state = shared
                .slot_freed
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        // Spawn while holding the lock: the job cannot report completion
        // before its handle is in the table.
        let ticket = state.table.next_ticket(item_id);
        let job_shared = Arc::clone(shared);
        let handle = thread::Builder::new()
            .name(format!("detail-{}", item_id))
            .spawn(move || run_detail_job(job_shared, ticket))
            .map_err(|source| SchedulerError::Spawn { item_id, source })?;
        state.table.insert(ticket, handle);
        shared.stats.record_admitted(state.table.len());
        tracing::trace!(item_id, in_flight = state.table.len(), "admitted detail job");
        Ok(Admission::Started(ticket))
    }

    /// Close admission and wait until every admitted job has finished.
    /// Concurrent callers all return only once the jobs are joined.
    pub fn drain(&self) {
        let shared = &self.shared;
        let handles = {
            let mut state = shared.lock();
            match state.phase {
                DrainPhase::Drained => return,
                DrainPhase::Draining => {
                    while state.phase != DrainPhase::Drained {
                        state = shared
                            .drained
                            .wait(state)
                            .unwrap_or_else(PoisonError::into_inner);
                    }
                    return;
                }
                DrainPhase::Open => {}
            }
            state.phase = DrainPhase::Draining;
            state.pending_removal = None;
            shared.slot_freed.notify_all();
            state.table.take_all()
        };

        tracing::info!(jobs = handles.len(), "draining in-flight detail jobs");
        for (_, handle) in handles {
            join_job(handle);
        }

        shared.lock().phase = DrainPhase::Drained;
        shared.drained.notify_all();
        tracing::info!("drain complete");
    }

    /// Remove the retained records. Only meaningful after `drain`.
    pub fn take_retained(&self) -> Vec<Record> {
        self.shared.lock().retained.drain_all()
    }
}

impl Drop for JobScheduler {
    fn drop(&mut self) {
        self.drain();
    }
}
