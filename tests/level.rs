//! Tests for severity levels.

use hierlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::All < Level::Trace);
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Fatal);
    assert!(Level::Fatal < Level::Mark);
    assert!(Level::Mark < Level::None);
}

#[test]
fn level_ranks() {
    assert_eq!(Level::All.rank(), 0);
    assert_eq!(Level::Info.rank(), 3);
    assert_eq!(Level::Fatal.rank(), 6);
    assert_eq!(Level::Mark.rank(), 10);
    assert_eq!(Level::None.rank(), 10_000);
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Mark.to_string(), "mark");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!(" none ".parse::<Level>().unwrap(), Level::None);
    assert_eq!("off".parse::<Level>().unwrap(), Level::None);
}

#[test]
fn level_from_str_invalid() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert_eq!(err.name(), "verbose");
}

#[test]
fn level_round_trips_through_display() {
    for level in Level::all() {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
}

#[test]
fn rank_of_is_lenient() {
    assert_eq!(Level::rank_of("WARN"), 4);
    assert_eq!(Level::rank_of("nonsense"), 0);
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn passes_compares_ranks() {
    assert!(Level::Warn.passes(Level::Info));
    assert!(Level::Info.passes(Level::Info));
    assert!(!Level::Debug.passes(Level::Info));
    assert!(Level::Mark.passes(Level::Fatal));
}

#[test]
fn all_passes_every_threshold_except_none() {
    for threshold in Level::message_levels() {
        assert!(Level::All.passes(threshold), "{threshold}");
    }
    assert!(!Level::All.passes(Level::None));
}

#[test]
fn none_threshold_blocks_everything() {
    for level in Level::message_levels() {
        assert!(!level.passes(Level::None), "{level}");
    }
}

#[test]
fn error_levels() {
    assert!(Level::Error.is_error());
    assert!(Level::Fatal.is_error());
    assert!(!Level::Warn.is_error());
    assert!(!Level::Mark.is_error());
}
