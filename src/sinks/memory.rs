//! In-memory capture sink

use crate::core::{LogRecord, Pattern, Result, Severity, Sink};
use chrono::{DateTime, Local};

/// Owned copy of a [`LogRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub logger_name: String,
    pub timestamp: DateTime<Local>,
    pub line: String,
    /// The line rendered through the sink's pattern, without colors
    pub rendered: String,
}

/// Keeps every record it receives; meant for tests and for embedding
/// applications that want to inspect or forward log output themselves.
///
/// Hold the sink through [`shared`](crate::core::shared) to read it back
/// after handing a clone to a logger.
#[derive(Debug)]
pub struct MemorySink {
    records: Vec<CapturedRecord>,
    threshold: Severity,
    pattern: Pattern,
    capacity: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            threshold: Severity::Trace,
            pattern: Pattern::default(),
            capacity: None,
        }
    }

    /// Keep only the most recent `capacity` records
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::new()
        }
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.clone()
    }

    /// Line bodies (padding and indentation included, pattern not applied)
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(|r| r.line.clone()).collect()
    }

    /// Lines as rendered through the pattern
    pub fn rendered(&self) -> Vec<String> {
        self.records.iter().map(|r| r.rendered.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return Ok(());
            }
            if self.records.len() >= capacity {
                self.records.remove(0);
            }
        }

        self.records.push(CapturedRecord {
            severity: record.severity,
            logger_name: record.logger_name.to_string(),
            timestamp: record.timestamp,
            line: record.line.to_string(),
            rendered: self.pattern.render(record, false),
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn set_pattern(&mut self, pattern: &Pattern) {
        self.pattern = pattern.clone();
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn name(&self) -> &str {
        "memory"
    }
}
