//! Tests for the file sink.

use hierlog::{Arg, Error, FileOutput, Level, LogRecord, Output, Registry, internal};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn record(message: &str, other_args: Vec<Arg>) -> LogRecord {
    LogRecord {
        logger_name: "svc".to_string(),
        level: Level::Info,
        message: message.to_string(),
        other_args,
    }
}

#[test]
fn file_output_appends_timestamped_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");
    let output = FileOutput::new(&path, false);

    output.write(&record("first", vec![])).unwrap();
    output.write(&record("second", vec![])).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" first"));
    assert!(lines[1].ends_with(" second"));
    // "h:mm:ss am" prefix
    let stamp = lines[0].trim_end_matches(" first");
    assert_eq!(stamp.matches(':').count(), 2);
    assert!(stamp.ends_with("am") || stamp.ends_with("pm"));
}

#[test]
fn file_output_writes_leftover_args_on_their_own_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("args.log");
    let output = FileOutput::new(&path, false).timestamp_format("T");

    let args = vec![Arg::from(7), Arg::json(&serde_json::json!({"k": 1}))];
    output.write(&record("msg", args)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "T msg\n7\n{\"k\":1}\n");
}

#[test]
fn file_output_creates_parent_directories() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("nested").join("deeper").join("out.log");
    let output = FileOutput::new(&path, false);
    output.write(&record("x", vec![])).unwrap();
    assert!(path.exists());
}

#[test]
fn clear_on_start_truncates() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("old.log");
    fs::write(&path, "stale\n").unwrap();

    let kept = FileOutput::new(&path, false);
    assert_eq!(fs::read_to_string(kept.path()).unwrap(), "stale\n");

    let _ = FileOutput::new(&path, true);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn tilde_is_expanded() {
    let output = FileOutput::new("~/hierlog-test.log", false);
    assert!(!output.path().starts_with("~"));
}

#[test]
fn file_appender_through_registry() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("reg.log");
    let registry = Registry::bare();
    registry.set_file_appender("FILE", &path, "SHORT_FORMAT", true);
    registry.set_root_logger(Level::Info, Some(&["FILE"])).unwrap();

    registry.get_logger("svc/db").warn("slow query %d ms", &[Arg::from(250)]);
    registry.get_logger("svc/db").debug("dropped", &[]);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("WARN  svc/db"));
    assert!(content.trim_end().ends_with("- slow query 250 ms"));
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<LogRecord>>>);

impl Output for Recorder {
    fn write(&self, record: &LogRecord) -> Result<(), Error> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[test]
fn write_failures_go_to_the_internal_channel() {
    let spy = Recorder::default();
    let diagnostics = internal::registry();
    diagnostics.set_custom_appender("FILE_SPY", spy.clone(), "SHORT_FORMAT");
    diagnostics.root().add_appender("FILE_SPY").unwrap();

    // A directory cannot be opened for appending.
    let tmp_dir = TempDir::new().unwrap();
    let registry = Registry::bare();
    registry.set_file_appender("BROKEN", tmp_dir.path(), "SHORT_FORMAT", false);
    registry.set_root_logger(Level::Info, Some(&["BROKEN"])).unwrap();

    registry.get_logger("svc").error("lost", &[]);
    registry.get_logger("svc").error("lost again", &[]);

    let seen = spy.0.lock().unwrap();
    let failures: Vec<&LogRecord> = seen
        .iter()
        .filter(|r| r.logger_name == "APPENDER" && r.message.contains("BROKEN"))
        .collect();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].level, Level::Error);
}
