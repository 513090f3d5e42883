//! Scheduler error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The OS refused to start a worker thread for a detail job.
    #[error("spawn detail job for item {item_id}: {source}")]
    Spawn {
        item_id: i64,
        #[source]
        source: std::io::Error,
    },
}
