//! CLI for scout.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use scout_core::config::{self, OutputFormat, ScoutConfig};
use std::path::PathBuf;

use commands::{run_pipeline, show_config};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(about = "Walk a paginated listing and print the youngest records", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/scout/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every page and detail record, then print the retained set sorted by name.
    Run(RunArgs),

    /// Print the config file path and the effective configuration.
    Config,
}

/// Overrides for values normally taken from the config file.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// First listing page URL.
    #[arg(long, value_name = "URL")]
    pub list_url: Option<String>,
    /// Detail URL prefix; the item id is appended.
    #[arg(long, value_name = "URL")]
    pub detail_url: Option<String>,
    /// Maximum detail fetches in flight.
    #[arg(long, short = 'j', value_name = "N")]
    pub parallelism: Option<usize>,
    /// Number of records to keep.
    #[arg(long, short = 'k', value_name = "K")]
    pub retain: Option<usize>,
    /// Output format: json or text.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl RunArgs {
    pub fn apply(&self, cfg: &mut ScoutConfig) {
        if let Some(url) = &self.list_url {
            cfg.list_url = url.clone();
        }
        if let Some(url) = &self.detail_url {
            cfg.detail_url = url.clone();
        }
        if let Some(n) = self.parallelism {
            cfg.max_parallelism = n;
        }
        if let Some(k) = self.retain {
            cfg.retain = k;
        }
        if let Some(format) = self.format {
            cfg.output = format;
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let (path, cfg) = match &cli.config {
            Some(path) => (path.clone(), config::load_from_path(path)?),
            None => (config::config_path()?, config::load_or_init()?),
        };
        tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);

        match cli.command {
            CliCommand::Run(args) => run_pipeline(cfg, &args)?,
            CliCommand::Config => show_config(&path, &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
