//! Admission-controlled detail job scheduler.
//!
//! Bounds how many detail fetches run at once, serializes every update of
//! the retained top-K set behind one lock, and provides a one-way drain that
//! stops admissions and waits for outstanding jobs.
//!
//! A finishing job never removes its own in-flight entry. It removes the
//! entry of the job that finished before it and leaves its own as pending,
//! so the table may over-count by one. Admitters blocked on a full table may
//! reap that pending entry themselves; drain joins whatever is left.

mod error;
mod job;
mod pool;
mod stats;
mod table;

pub use error::SchedulerError;
pub use pool::{Admission, JobScheduler, SchedulerSettings};
pub use stats::{RunStats, StatsSnapshot};
pub use table::JobTicket;
