//! Property-based tests for eggshell using proptest

use chrono::{Local, TimeZone};
use eggshell::core::interpolate;
use eggshell::prelude::*;
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn quiet_logger(memory: Severity) -> (Logger, CaptureAppender) {
    let console = CaptureAppender::new();
    let logger = Logger::builder()
        .options(
            Options::default()
                .file(None::<String>)
                .file_level(Severity::Emerg)
                .break_level(Severity::Emerg)
                .print_level(Severity::Debugv)
                .memory_level(memory),
        )
        .console(console.clone())
        .clock(|| {
            Local
                .with_ymd_and_hms(2024, 6, 30, 12, 0, 0)
                .earliest()
                .expect("valid local time")
        })
        .build()
        .unwrap();
    (logger, console)
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// `passes` is exactly a weight comparison
    #[test]
    fn test_passes_matches_weight(event in severity(), threshold in severity()) {
        prop_assert_eq!(event.passes(threshold), event.weight() <= threshold.weight());
    }

    /// Tags parse back to the same rung
    #[test]
    fn test_severity_str_roundtrip(level in severity()) {
        let parsed: Severity = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Emerg passes every threshold, debugv only its own
    #[test]
    fn test_ladder_extremes(threshold in severity()) {
        prop_assert!(Severity::Emerg.passes(threshold));
        prop_assert_eq!(Severity::Debugv.passes(threshold), threshold == Severity::Debugv);
    }
}

// ============================================================================
// Sanitization Tests
// ============================================================================

proptest! {
    /// Abbreviated output never exceeds the configured width
    #[test]
    fn test_abbreviation_width(text in "\\PC{0,80}", width in 4usize..60) {
        let abbr = Abbreviation::new(width, "...");
        let out = abbr.apply(&text);
        prop_assert!(out.chars().count() <= width);
        if text.chars().count() <= width {
            prop_assert_eq!(out, text);
        } else {
            prop_assert!(out.ends_with("..."));
        }
    }

    /// Container members stay bounded whatever their size
    #[test]
    fn test_container_members_bounded(items in prop::collection::vec("[a-z]{0,100}", 1..8)) {
        let abbr = Abbreviation::default();
        let rendered = Arg::from(items.clone()).sanitize(&abbr);
        for (index, member) in rendered.split(", ").enumerate() {
            let prefix = format!("{}: ", index);
            prop_assert!(member.starts_with(&prefix));
            prop_assert!(member[prefix.len()..].chars().count() <= abbr.width);
        }
    }

    /// Integers render unquoted, text without digits quoted
    #[test]
    fn test_scalar_quoting(n in any::<i64>(), s in "[a-z]{1,20}") {
        let abbr = Abbreviation::default();
        prop_assert_eq!(Arg::from(n).sanitize(&abbr), n.to_string());
        prop_assert_eq!(Arg::from(s.as_str()).sanitize(&abbr), format!("'{}'", s));
    }

    /// Templates without conversions come back untouched
    #[test]
    fn test_interpolate_plain_text(text in "[^%]{0,60}", args in prop::collection::vec("[a-z]{0,5}", 0..3)) {
        prop_assert_eq!(interpolate(&text, &args), text);
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    /// Resolving the alias and logging the target give the same line
    #[test]
    fn test_alias_idempotent(message in "[a-zA-Z0-9 ]{0,40}") {
        let (logger, console) = quiet_logger(Severity::Debug);
        logger.error(message.as_str(), &[]).unwrap();
        logger.err(message.as_str(), &[]).unwrap();

        let lines = console.lines();
        prop_assert_eq!(lines.len(), 2);
        prop_assert_eq!(&lines[0], &lines[1]);
    }

    /// The memory buffer holds exactly the events that clear its threshold
    #[test]
    fn test_memory_threshold(threshold in severity(), events in prop::collection::vec(severity(), 0..20)) {
        let (logger, _console) = quiet_logger(threshold);
        let mut expected = 0;
        for event in events {
            if event == Severity::Emerg {
                continue;
            }
            logger.log(event, "event", &[]).unwrap();
            if event.passes(threshold) {
                expected += 1;
            }
        }
        prop_assert_eq!(logger.memory_entries().len(), expected);
    }

    /// Fan-out emits one line per template
    #[test]
    fn test_fan_out_line_count(lines in prop::collection::vec("[a-z ]{0,20}", 0..10)) {
        let (logger, console) = quiet_logger(Severity::Debug);
        let result = logger.info(lines.clone(), &[]).unwrap();
        prop_assert_eq!(result, Conclusion::Skip);
        prop_assert_eq!(console.lines().len(), lines.len());
    }
}
