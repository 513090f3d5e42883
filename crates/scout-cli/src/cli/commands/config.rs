//! `scout config` – show where the config lives and what is in effect.

use anyhow::Result;
use scout_core::config::ScoutConfig;
use std::path::Path;

pub fn show_config(path: &Path, cfg: &ScoutConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
