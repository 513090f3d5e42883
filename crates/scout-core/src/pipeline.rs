//! Pipeline entry: walk, drain, sort by name, emit.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::ScoutConfig;
use crate::model::Record;
use crate::scheduler::{JobScheduler, SchedulerSettings, StatsSnapshot};
use crate::sink::RecordSink;
use crate::source::RecordSource;
use crate::walker::{PageWalker, WalkSummary};

/// Result of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Retained records, sorted by name.
    pub records: Vec<Record>,
    pub stats: StatsSnapshot,
    pub walk: WalkSummary,
}

/// Walk the listing to completion and return the retained records sorted by name.
pub fn collect(cfg: &ScoutConfig, source: Arc<dyn RecordSource>) -> Result<RunReport> {
    cfg.validate()?;
    let scheduler = JobScheduler::new(Arc::clone(&source), SchedulerSettings::from(cfg));
    let walk = PageWalker::from_config(cfg, source, &scheduler)
        .walk()
        .context("walk listing")?;

    let mut records = scheduler.take_retained();
    records.sort_by(|a, b| a.name.cmp(&b.name));
    let stats = scheduler.stats().snapshot();
    tracing::info!(
        pages = stats.pages_fetched,
        admitted = stats.jobs_admitted,
        fetch_failures = stats.fetch_failures,
        rejected = stats.validation_rejections,
        peak_in_flight = stats.peak_in_flight,
        retained = records.len(),
        "run finished"
    );
    Ok(RunReport {
        records,
        stats,
        walk,
    })
}

/// `collect`, then hand the sorted records to `sink`.
pub fn run(
    cfg: &ScoutConfig,
    source: Arc<dyn RecordSource>,
    sink: &mut dyn RecordSink,
) -> Result<RunReport> {
    let report = collect(cfg, source)?;
    sink.emit(&report.records).context("emit records")?;
    Ok(report)
}
