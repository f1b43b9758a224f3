//! Standard output sink

use crate::core::{LogRecord, Pattern, Result, Severity, Sink};
use std::io::Write;

/// Writes rendered lines to stdout, coloring the pattern's `%^..%$` range.
pub struct StdoutSink {
    use_colors: bool,
    threshold: Severity,
    pattern: Pattern,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            threshold: Severity::Trace,
            pattern: Pattern::default(),
        }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let output = self.pattern.render(record, self.use_colors);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
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
        if self.use_colors {
            "stdout_color"
        } else {
            "stdout"
        }
    }
}
