//! Integration tests for the eggshell logger
//!
//! These tests verify:
//! - Independent sink thresholds
//! - Alias handling and memory keying
//! - File sink behavior, including a missing log path
//! - The halt path and its trace dump
//! - Backend forwarding and `mark`

use chrono::{Local, TimeZone};
use eggshell::prelude::*;
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

struct FakeProbe;

impl StackProbe for FakeProbe {
    fn frames(&self, skip: usize) -> Vec<Frame> {
        vec![
            Frame::new("copy")
                .with_class("Backup")
                .with_location("/opt/tool/src/backup.rs", 88)
                .with_args(vec![Arg::from("/srv/data")]),
            Frame::new("run")
                .with_class("Cli")
                .with_location("/opt/tool/src/main.rs", 12),
        ]
        .into_iter()
        .skip(skip)
        .collect()
    }
}

fn quiet() -> Options {
    Options::default()
        .file(None::<String>)
        .file_level(Severity::Emerg)
        .break_level(Severity::Emerg)
        .print_level(Severity::Debugv)
}

fn build(options: Options) -> (Logger, CaptureAppender) {
    let console = CaptureAppender::new();
    let logger = Logger::builder()
        .options(options)
        .console(console.clone())
        .probe(FakeProbe)
        .clock(|| {
            Local
                .with_ymd_and_hms(2024, 3, 1, 23, 59, 7)
                .earliest()
                .expect("valid local time")
        })
        .build()
        .expect("Failed to build logger");
    (logger, console)
}

#[test]
fn test_memory_threshold() {
    let (logger, _console) = build(quiet().memory_level(Severity::Info));

    logger.debug("dropped", &[]).unwrap();
    logger.warning("kept", &[]).unwrap();

    assert!(logger.memory_for("debug").is_empty());
    assert_eq!(logger.memory_for("warning"), vec![" warning 23:59:07    kept"]);
}

#[test]
fn test_print_threshold() {
    let (logger, console) = build(quiet().print_level(Severity::Notice));

    // emerg always reaches the halt threshold, so start one rung lower.
    for severity in Severity::ALL.into_iter().skip(1) {
        logger.log(severity, "%s", &[Arg::from(severity.to_str())]).unwrap();
    }

    let lines = console.lines();
    assert_eq!(lines.len(), 5);
    assert!(lines.last().unwrap().ends_with("'notice'"));
}

#[test]
fn test_alias_is_idempotent() {
    let (logger, console) = build(quiet());

    logger.log("error", "same", &[]).unwrap();
    logger.log("err", "same", &[]).unwrap();

    let lines = console.lines();
    assert_eq!(lines[0], lines[1]);

    let memory = logger.memory();
    assert_eq!(memory.get("error").map(Vec::len), Some(1));
    assert_eq!(memory.get("err").map(Vec::len), Some(1));
}

#[test]
fn test_fan_out_returns_skip() {
    let (logger, console) = build(quiet());

    let result = logger
        .notice(vec!["first %s", "second %s"], &[Arg::from("x")])
        .unwrap();

    assert_eq!(result, Conclusion::Skip);
    assert_eq!(
        console.lines(),
        vec![
            "  notice 23:59:07    first 'x'",
            "  notice 23:59:07    second 'x'",
        ]
    );
}

#[test]
fn test_single_dispatch_returns_fail() {
    let (logger, _console) = build(quiet());
    let result = logger.info("done", &[]).unwrap();
    assert_eq!(result, Conclusion::Fail);
    assert!(!result.is_ok());
}

#[test]
fn test_sanitized_containers() {
    let (logger, console) = build(quiet());
    let long = "x".repeat(40);

    logger
        .info("got %s", &[Arg::from(vec![Arg::from(1), Arg::from(long.as_str())])])
        .unwrap();

    let expected = format!("0: 1, 1: '{}...", "x".repeat(26));
    assert_eq!(console.lines()[0], format!("    info 23:59:07    got {}", expected));
}

#[test]
fn test_file_sink_appends() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("tool.log");

    let (logger, _console) = build(
        quiet()
            .file(Some(&log_file))
            .file_level(Severity::Info)
            .print_level(Severity::Emerg),
    );

    logger.info("one", &[]).unwrap();
    logger.debug("not written", &[]).unwrap();
    logger.stderr("child complained", &[]).unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "    info 23:59:07    one");
    assert_eq!(lines[1], format!("{}child complained", " ".repeat(25)));
    assert_eq!(logger.metrics().file_written(), 2);
}

#[test]
fn test_file_sink_failure_is_not_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("absent").join("tool.log");

    let (logger, console) = build(quiet().file(Some(&log_file)).file_level(Severity::Info));

    assert!(logger.info("still printed", &[]).is_ok());
    assert_eq!(console.lines().len(), 1);
    assert_eq!(logger.metrics().sink_failures(), 1);
}

#[test]
fn test_missing_log_file() {
    let (logger, _console) = build(quiet().file_level(Severity::Debug));

    let err = logger.debug("lost", &[]).unwrap_err();
    assert!(matches!(err, LoggerError::MissingLogFile { .. }));
    assert_eq!(err.exit_code(), 1);

    // Below the file threshold nothing needs the path.
    assert!(logger.debugv("fine", &[]).is_ok());
}

#[test]
fn test_halt_dumps_trail() {
    let (logger, console) = build(quiet().break_level(Severity::Err).app_root("/opt/tool/"));

    let err = logger.err("cannot continue", &[]).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.exit_code(), 1);

    let lines = console.lines();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "     err 23:59:07    cannot continue");
    assert!(lines[2].contains("Process halt, triggered by the following path:"));
    assert!(lines[4].starts_with("   trail 23:59:07    "));
    assert!(lines[4].contains("src/main.rs#12"));
    assert!(lines[4].ends_with("Cli->run()"));
    assert!(lines[5].contains("src/backup.rs#88"));
    assert!(!lines[5].contains("/opt/tool"));

    assert_eq!(logger.memory_for("trail").len(), 6);
}

#[test]
fn test_halt_uses_configured_trail_tag() {
    let mut options = quiet().break_level(Severity::Crit);
    options.log_trail_level = "crumb".to_string();
    let (logger, _console) = build(options);

    assert!(logger.alert("stop", &[]).is_err());
    assert_eq!(logger.memory_for("crumb").len(), 6);
    assert!(logger.memory_for("crumb")[0].starts_with("   crumb "));
}

#[test]
fn test_unknown_level() {
    let (logger, console) = build(quiet());

    let err = logger.log("verbose", "hello", &[]).unwrap_err();
    assert!(matches!(err, LoggerError::UnknownLevel { ref tag } if tag == "verbose"));
    assert!(!err.is_fatal());
    assert!(console.lines().is_empty());
}

#[test]
fn test_backend_receives_every_event() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let target = Arc::clone(&received);

    let logger = Logger::builder()
        .options(
            quiet()
                .print_level(Severity::Emerg)
                .memory_level(Severity::Emerg),
        )
        .console(CaptureAppender::new())
        .backend(move |level: BackendLevel, message: &str| {
            target.lock().push(format!("{}:{}", level, message));
        })
        .build()
        .unwrap();

    logger.section_open("Setup", &[]).unwrap();
    logger.stderr("oops", &[]).unwrap();
    logger.debugv("%d", &[Arg::from(7)]).unwrap();

    assert_eq!(
        received.lock().clone(),
        vec!["notice:Setup", "warning:oops", "debug:7"]
    );
    assert_eq!(logger.metrics().backend_forwarded(), 3);
}

#[test]
fn test_mark_logs_caller() {
    let (logger, console) = build(quiet().mark_trace(true));

    logger.mark(Severity::Info).unwrap();
    assert_eq!(
        console.lines(),
        vec!["    info 23:59:07    =Fired: Backup->copy('/srv/data')"]
    );
}

#[test]
fn test_reconfigure_takes_effect() {
    let (logger, console) = build(quiet());

    let options = logger
        .reconfigure(|o| {
            o.log_print_level = Severity::Warning;
            o.log_date_format = "Y-m-d H:i".to_string();
        })
        .unwrap();
    assert_eq!(options.log_print_level, Severity::Warning);

    logger.info("hidden", &[]).unwrap();
    logger.warning("shown", &[]).unwrap();
    assert_eq!(console.lines(), vec![" warning 2024-03-01 23:59    shown"]);
}

#[test]
fn test_options_from_json() {
    let options = Options::from_json(
        r#"{
            "log-print-level": "notice",
            "log-section-open": ["section_open", "h1"],
            "log-file": null,
            "log-file-level": "emerg",
            "log-break-level": "emerg"
        }"#,
    )
    .unwrap();
    let (logger, console) = build(options);

    logger.log("h1", "Title", &[]).unwrap();
    logger.info("hidden", &[]).unwrap();
    assert_eq!(console.lines(), vec![format!("\n{}Title", " ".repeat(18))]);
}
