//! Record handed to sinks

use super::severity::Severity;
use chrono::{DateTime, Local};

/// One physical line of output on its way to a sink.
///
/// `line` already carries the label padding and section indentation; sinks
/// only wrap it in their pattern. The timestamp is taken once per log call so
/// that every sink and every line of a multi-line message agree on it.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub logger_name: &'a str,
    pub timestamp: DateTime<Local>,
    pub line: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(
        severity: Severity,
        logger_name: &'a str,
        timestamp: DateTime<Local>,
        line: &'a str,
    ) -> Self {
        Self {
            severity,
            logger_name,
            timestamp,
            line,
        }
    }

    /// Record stamped with the current local time
    pub fn now(severity: Severity, logger_name: &'a str, line: &'a str) -> Self {
        Self::new(severity, logger_name, Local::now(), line)
    }
}
