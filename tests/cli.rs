//! Tests for the CLI helpers.
#![cfg(feature = "cli")]

use clap::Parser;
use hierlog::cli::commands::render_tree;
use hierlog::cli::util::logger_name;
use hierlog::cli::{Cli, Command, cmd_log, cmd_tree};
use hierlog::{Config, Level};
use std::fs;
use std::process::ExitCode;
use tempfile::TempDir;

#[test]
fn parses_log_command() {
    let cli = Cli::parse_from(["hierlog", "log", "svc/db", "warn", "disk", "low", "-c", "x.toml"]);
    match cli.command {
        Command::Log {
            logger,
            level,
            message,
            config,
        } => {
            assert_eq!(logger, "svc/db");
            assert_eq!(level, "warn");
            assert_eq!(message, vec!["disk", "low"]);
            assert_eq!(config.unwrap().to_str(), Some("x.toml"));
        }
        Command::Tree { .. } => panic!("expected log"),
    }
}

#[test]
fn parses_tree_command() {
    let cli = Cli::parse_from(["hierlog", "tree"]);
    assert!(matches!(cli.command, Command::Tree { config: None }));
}

#[test]
fn root_aliases() {
    assert_eq!(logger_name("ROOT"), "");
    assert_eq!(logger_name("root"), "");
    assert_eq!(logger_name("svc"), "svc");
}

#[test]
fn tree_shows_explicit_and_inherited_levels() {
    let config = Config::from_toml(
        r#"
[root]
level = "warn"

[loggers."svc/db"]
level = "debug"
"#,
    )
    .unwrap();
    let registry = config.build_registry().unwrap();
    registry.get_logger("svc");

    let tree = render_tree(&registry.loggers());
    let lines: Vec<&str> = tree.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ROOT"));
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("appenders=STDOUT"));
    assert!(lines[1].starts_with("svc "));
    assert!(lines[1].contains("(WARN)"));
    assert!(lines[1].contains("parent=ROOT"));
    assert!(lines[2].contains("DEBUG"));
    assert!(lines[2].contains("parent=svc"));
    assert_eq!(registry.get_logger("svc").level(), Some(Level::Warn));
}

#[test]
fn log_command_writes_through_config() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("cli.log");
    let config_path = tmp_dir.path().join("hierlog.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[appenders.FILE]
kind = "file"
path = "{}"
pattern = "SHORT_FORMAT"

[root]
level = "info"
appenders = ["FILE"]
"#,
            log_path.display()
        ),
    )
    .unwrap();

    let message = vec!["50%".to_string(), "done".to_string()];
    let code = cmd_log("jobs", "info", &message, Some(config_path.as_path()));
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(
        cmd_log("jobs", "loud", &message, Some(config_path.as_path())),
        ExitCode::FAILURE
    );
    assert_eq!(cmd_tree(Some(config_path.as_path())), ExitCode::SUCCESS);

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.trim_end().ends_with("jobs                     - 50% done"));
}
