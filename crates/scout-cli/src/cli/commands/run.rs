//! `scout run` – walk the listing and print the retained records.

use anyhow::Result;
use scout_core::config::ScoutConfig;
use scout_core::pipeline;
use scout_core::sink;
use scout_core::source::{HttpSource, RecordSource};
use std::sync::Arc;

use crate::cli::RunArgs;

pub fn run_pipeline(mut cfg: ScoutConfig, args: &RunArgs) -> Result<()> {
    args.apply(&mut cfg);
    cfg.validate()?;

    let source: Arc<dyn RecordSource> = Arc::new(HttpSource::new(cfg.http()));
    let stdout = std::io::stdout();
    let mut out = sink::for_format(cfg.output, stdout.lock());
    let report = pipeline::run(&cfg, source, out.as_mut())?;

    if let Some(e) = &report.walk.page_error {
        eprintln!("warning: listing stopped early: {}", e);
    }
    if report.stats.fetch_failures > 0 {
        eprintln!(
            "warning: {} detail fetch(es) failed",
            report.stats.fetch_failures
        );
    }
    Ok(())
}
