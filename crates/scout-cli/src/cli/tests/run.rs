//! Tests for the run subcommand and its config overrides.

use super::{parse, try_parse};
use crate::cli::CliCommand;
use scout_core::config::{OutputFormat, ScoutConfig};

#[test]
fn cli_parse_run_defaults() {
    match parse(&["scout", "run"]).command {
        CliCommand::Run(args) => {
            assert!(args.list_url.is_none());
            assert!(args.parallelism.is_none());
            assert!(args.retain.is_none());
            assert!(args.format.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_overrides() {
    match parse(&[
        "scout",
        "run",
        "--list-url",
        "http://127.0.0.1:9/list",
        "--detail-url",
        "http://127.0.0.1:9/detail/",
        "-j",
        "3",
        "-k",
        "10",
        "--format",
        "text",
    ])
    .command
    {
        CliCommand::Run(args) => {
            let mut cfg = ScoutConfig::default();
            args.apply(&mut cfg);
            assert_eq!(cfg.list_url, "http://127.0.0.1:9/list");
            assert_eq!(cfg.detail_url, "http://127.0.0.1:9/detail/");
            assert_eq!(cfg.max_parallelism, 3);
            assert_eq!(cfg.retain, 10);
            assert_eq!(cfg.output, OutputFormat::Text);
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_apply_keeps_unset_values() {
    let mut cfg = ScoutConfig::default();
    crate::cli::RunArgs::default().apply(&mut cfg);
    assert_eq!(cfg.max_parallelism, 20);
    assert_eq!(cfg.retain, 5);
    assert_eq!(cfg.output, OutputFormat::Json);
}

#[test]
fn cli_parse_run_rejects_bad_format() {
    assert!(try_parse(&["scout", "run", "--format", "xml"]).is_err());
}
