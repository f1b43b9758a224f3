//! Property-based tests for section_logger using proptest

use proptest::prelude::*;
use section_logger::core::{template, FormattingPolicy, SECTION_INDENT};
use section_logger::prelude::*;
use std::sync::Arc;

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Trace),
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

fn threshold() -> impl Strategy<Value = Severity> {
    prop_oneof![severity(), Just(Severity::Off)]
}

fn isolated(name: &str) -> Logger {
    Logger::with_registry(name, Arc::new(LoggerRegistry::new()))
}

// ============================================================================
// Formatting
// ============================================================================

proptest! {
    /// Label plus padding always fills the same column
    #[test]
    fn test_label_alignment(severity in severity(), depth in 0usize..8, body in "[a-z ]{1,40}") {
        let policy = FormattingPolicy::new();
        let lines = policy.apply(severity, depth, &body);
        prop_assert_eq!(lines.len(), 1);

        let padding = policy.padding(severity);
        prop_assert_eq!(severity.label().len() + padding, policy.label_width());

        let expected = format!("{}{}{}", " ".repeat(padding), SECTION_INDENT.repeat(depth), body);
        prop_assert_eq!(&lines[0], &expected);
    }

    /// Each physical line gets its own prefix
    #[test]
    fn test_multiline_prefixes(severity in severity(), depth in 0usize..4, parts in prop::collection::vec("[a-z]{1,10}", 1..6)) {
        let policy = FormattingPolicy::new();
        let message = parts.join("\n");
        let lines = policy.apply(severity, depth, &message);

        prop_assert_eq!(lines.len(), parts.len());
        let prefix = policy.prefix(severity, depth);
        for (line, part) in lines.iter().zip(&parts) {
            prop_assert_eq!(line, &format!("{}{}", prefix, part));
        }
    }
}

// ============================================================================
// Threshold filtering
// ============================================================================

proptest! {
    /// A message reaches the sinks exactly when it passes the threshold
    #[test]
    fn test_threshold_filtering(threshold in threshold(), severity in severity()) {
        let capture = shared(MemorySink::new());
        let mut logger = isolated("prop_threshold");
        logger.add_sink(capture.clone());
        logger.set_level(threshold);

        logger.log(severity, "sample").unwrap();

        let expected = threshold != Severity::Off && severity >= threshold;
        prop_assert_eq!(capture.lock().len(), usize::from(expected));
        prop_assert_eq!(logger.is_enabled(severity), expected);
    }

    /// Per-level bits are independent of each other
    #[test]
    fn test_level_set_bits(enabled in prop::collection::vec(severity(), 0..6), queried in severity()) {
        let mut set = LevelSet::none();
        for s in &enabled {
            set.enable(*s);
        }
        prop_assert_eq!(set.is_enabled(queried), enabled.contains(&queried));
    }
}

// ============================================================================
// Section depth
// ============================================================================

proptest! {
    /// Depth follows opens minus closes and never underflows
    #[test]
    fn test_section_depth_balance(ops in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut logger = isolated("prop_depth");
        let mut expected: usize = 0;

        for open in ops {
            if open {
                logger.start_section("s").unwrap();
                expected += 1;
            } else {
                logger.end_section("s").unwrap();
                expected = expected.saturating_sub(1);
            }
            prop_assert_eq!(logger.section_depth(), expected);
        }
    }

    /// Nested guards always bring the depth back to where it started
    #[test]
    fn test_scoped_sections_unwind(depth in 1usize..12) {
        fn nest(logger: &mut Logger, remaining: usize) {
            if remaining == 0 {
                return;
            }
            let mut guard = ScopedSection::new(logger, remaining).unwrap();
            nest(&mut guard, remaining - 1);
        }

        let capture = shared(MemorySink::new());
        let mut logger = isolated("prop_guard");
        logger.add_sink(capture.clone());
        nest(&mut logger, depth);

        prop_assert_eq!(logger.section_depth(), 0);
        prop_assert_eq!(capture.lock().len(), depth * 2);
    }
}

// ============================================================================
// Runtime templates
// ============================================================================

proptest! {
    /// `{}` placeholders consume arguments in order
    #[test]
    fn test_template_sequential(values in prop::collection::vec(any::<i64>(), 0..8)) {
        let template_str = vec!["{}"; values.len()].join(",");
        let args: Vec<&dyn std::fmt::Display> = values.iter().map(|v| v as &dyn std::fmt::Display).collect();

        let rendered = template::format(&template_str, &args).unwrap();
        let expected = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        prop_assert_eq!(rendered, expected);
    }

    /// Too few arguments is always an error, never a panic
    #[test]
    fn test_template_missing_argument(count in 1usize..8) {
        let template_str = "{}".repeat(count);
        let zero: &dyn std::fmt::Display = &0;
        let args = vec![zero; count - 1];
        let err = template::format(&template_str, &args).unwrap_err();
        prop_assert!(err.is_format());
    }
}
