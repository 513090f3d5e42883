//! Tests for the config subcommand and the global --config flag.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_config() {
    let cli = parse(&["scout", "config"]);
    assert!(matches!(cli.command, CliCommand::Config));
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_global_config_path() {
    let cli = parse(&["scout", "run", "--config", "/tmp/scout.toml"]);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/scout.toml"))
    );
    assert!(matches!(cli.command, CliCommand::Run(_)));
}
