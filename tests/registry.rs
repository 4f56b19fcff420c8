//! Tests for registry configuration operations.

use hierlog::{Error, Level, LogRecord, Output, Registry};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<LogRecord>>>);

impl Output for Recorder {
    fn write(&self, record: &LogRecord) -> Result<(), Error> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }
}

impl Recorder {
    fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[test]
fn new_registry_has_stdout_on_root() {
    let registry = Registry::new();
    let root = registry.root();
    assert_eq!(root.level(), Some(Level::Info));
    assert!(registry.get_appender("STDOUT").is_some());
    let rows = registry.loggers();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "");
    assert_eq!(rows[0].appenders, vec!["STDOUT"]);
}

#[test]
fn bare_registry_has_no_appenders() {
    let registry = Registry::bare();
    assert!(registry.get_appender("STDOUT").is_none());
    assert!(registry.root().appenders_for(Level::Fatal).is_empty());
}

#[test]
fn unknown_appender_is_reported_and_changes_nothing() {
    let registry = Registry::bare();
    registry.set_custom_appender("A", Recorder::default(), "SHORT_FORMAT");
    registry.set_logger("svc", Level::Warn, Some(&["A"])).unwrap();

    let err = registry
        .set_logger("svc", Level::Debug, Some(&["A", "MISSING"]))
        .unwrap_err();
    match &err {
        Error::UnknownAppender { appender, logger } => {
            assert_eq!(appender, "MISSING");
            assert_eq!(logger, "svc");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "appender [MISSING] does not exist - logger [svc] definition error"
    );

    let svc = registry.get_logger("svc");
    assert_eq!(svc.explicit_level(), Some(Level::Warn));
    assert_eq!(svc.appenders_for(Level::Warn).len(), 1);
}

#[test]
fn unknown_appender_on_root_names_root() {
    let registry = Registry::bare();
    let err = registry
        .set_root_logger(Level::Info, Some(&["NOPE"]))
        .unwrap_err();
    assert!(err.to_string().contains("logger [ROOT]"));
}

#[test]
fn add_appender_rejects_unknown_names() {
    let registry = Registry::bare();
    let err = registry.get_logger("x").add_appender("NOPE").unwrap_err();
    assert!(matches!(err, Error::UnknownAppender { .. }));
}

#[test]
fn set_logger_replaces_appenders() {
    let registry = Registry::bare();
    let a = Recorder::default();
    let b = Recorder::default();
    registry.set_custom_appender("A", a.clone(), "SHORT_FORMAT");
    registry.set_custom_appender("B", b.clone(), "SHORT_FORMAT");

    registry.set_logger("svc", Level::Info, Some(&["A"])).unwrap();
    registry.set_logger("svc", Level::Info, Some(&["B"])).unwrap();
    registry.get_logger("svc").info("x", &[]);
    assert_eq!(a.count(), 0);
    assert_eq!(b.count(), 1);

    // Without a list, only the threshold changes.
    registry.set_logger("svc", Level::Debug, None).unwrap();
    registry.get_logger("svc").debug("y", &[]);
    assert_eq!(b.count(), 2);
}

#[test]
fn set_loggers_applies_to_each_name() {
    let registry = Registry::bare();
    registry
        .set_loggers(&["a", "b", "c/d"], Level::Error, None)
        .unwrap();
    for name in ["a", "b", "c/d"] {
        assert_eq!(registry.get_logger(name).explicit_level(), Some(Level::Error));
    }
}

#[test]
fn loggers_are_sorted_case_insensitively() {
    let registry = Registry::bare();
    registry.get_logger("beta");
    registry.get_logger("Alpha/x");
    registry.get_logger("Alpha");
    registry.set_logger("gamma", Level::Warn, None).unwrap();

    let rows = registry.loggers();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["", "Alpha", "Alpha/x", "beta", "gamma"]);

    let nested = &rows[2];
    assert_eq!(nested.parent.as_deref(), Some("Alpha"));
    assert_eq!(nested.level, Some(Level::Info));
    assert!(!nested.explicit);
    assert!(rows[4].explicit);
    assert_eq!(rows[0].parent, None);
}

#[test]
fn reset_levels_opens_everything() {
    let registry = Registry::bare();
    let rec = Recorder::default();
    registry.set_custom_appender("R", rec.clone(), "SHORT_FORMAT");
    registry.set_root_logger(Level::Error, Some(&["R"])).unwrap();
    registry.set_logger("svc", Level::None, None).unwrap();

    registry.reset_levels();
    let svc = registry.get_logger("svc");
    assert_eq!(svc.explicit_level(), None);
    assert_eq!(svc.level(), Some(Level::All));
    svc.trace("now visible", &[]);
    assert_eq!(rec.count(), 1);
}

#[test]
fn clear_restores_defaults_and_handles_survive() {
    let registry = Registry::new();
    let rec = Recorder::default();
    registry.set_custom_appender("R", rec.clone(), "SHORT_FORMAT");
    let svc = registry.set_logger("svc", Level::Debug, Some(&["R"])).unwrap();

    registry.clear();
    assert!(registry.get_appender("R").is_none());
    assert!(registry.get_appender("STDOUT").is_some());
    assert_eq!(svc.explicit_level(), None);
    assert_eq!(svc.level(), Some(Level::Info));
    svc.debug("dropped", &[]);
    assert_eq!(rec.count(), 0);
}

#[test]
fn get_appender_returns_registered_instance() {
    let registry = Registry::bare();
    let registered = registry.set_custom_appender("R", Recorder::default(), "SHORT_FORMAT");
    let found = registry.get_appender("R").unwrap();
    assert!(Arc::ptr_eq(&registered, &found));
    assert_eq!(found.name(), "R");
}

#[test]
fn builder_declares_appenders_and_loggers() {
    let rec = Recorder::default();
    let registry = Registry::builder()
        .custom("R", rec.clone(), "SHORT_FORMAT")
        .root(Level::Warn, &["R"])
        .logger("svc/db", Level::Debug, &[])
        .build()
        .unwrap();

    registry.get_logger("svc").info("dropped", &[]);
    registry.get_logger("svc/db/pool").debug("kept", &[]);
    assert_eq!(rec.count(), 1);
}

#[test]
fn builder_reports_unknown_appenders() {
    let result = Registry::builder()
        .logger("svc", Level::Info, &["LATER"])
        .console("LATER", "SHORT_FORMAT")
        .build();
    assert!(matches!(result, Err(Error::UnknownAppender { .. })));
}

#[test]
fn clones_share_state() {
    let registry = Registry::bare();
    let other = registry.clone();
    other.set_logger("svc", Level::Mark, None).unwrap();
    assert_eq!(registry.get_logger("svc").level(), Some(Level::Mark));
}

#[test]
fn global_free_functions_share_one_registry() {
    let rec = Recorder::default();
    hierlog::set_custom_appender("GLOBAL_TEST", rec.clone(), "SHORT_FORMAT");
    hierlog::set_logger("global/test", Level::Info, Some(&["GLOBAL_TEST"])).unwrap();
    hierlog::get_logger("global/test/child").warn("hello", &[]);
    assert!(hierlog::get_appender("GLOBAL_TEST").is_some());
    assert!(
        hierlog::loggers()
            .iter()
            .any(|row| row.name == "global/test/child")
    );
    assert_eq!(rec.count(), 1);
}
