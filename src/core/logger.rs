//! Main logger implementation

use super::{
    config::{LoggerConfig, SinkConfig, DEFAULT_LOGGER_NAME},
    error::Result,
    formatting::FormattingPolicy,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    pattern::Pattern,
    registry::LoggerRegistry,
    severity::Severity,
    sink::{shared, SharedSink},
    template,
};
use crate::sinks::{FileSink, RotatingFileSink, StdoutSink};
use chrono::Local;
use std::fmt::{self, Write as _};
use std::path::Path;
use std::sync::Arc;

/// Severity used by [`Logger::start_section`] and [`Logger::end_section`].
pub const SECTION_SEVERITY: Severity = Severity::Info;

/// Leveled logger with section nesting and sink fan-out.
///
/// Messages below the threshold are dropped before their text is produced.
/// Accepted messages are split into physical lines, each prefixed with label
/// padding and one `"| "` per open section, and written to every sink in
/// registration order.
///
/// Every mutator that touches the threshold, the pattern or the sink list
/// pushes the current threshold and pattern into all sinks before returning.
///
/// A `Logger` does no internal locking: share it between threads only behind
/// an external mutex, or give each thread its own.
///
/// # Example
///
/// ```
/// use section_logger::prelude::*;
///
/// let capture = shared(MemorySink::new());
/// let mut logger = Logger::with_registry("doc", LoggerRegistry::new().into());
/// logger.add_sink(capture.clone());
///
/// logger.start_section("load")?;
/// logger.info(format_args!("{} rows", 3))?;
/// logger.end_section("load")?;
///
/// assert_eq!(
///     capture.lock().lines(),
///     vec![
///         "    === start load === {",
///         "    | 3 rows",
///         "    ===   end load === }",
///     ]
/// );
/// # Ok::<(), section_logger::LoggerError>(())
/// ```
pub struct Logger {
    name: String,
    registry: Arc<LoggerRegistry>,
    threshold: Severity,
    pattern: Pattern,
    policy: FormattingPolicy,
    section_depth: usize,
    sinks: Vec<SharedSink>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger without sinks, registered in the process-wide registry
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_registry(name, LoggerRegistry::global())
    }

    /// Logger without sinks, registered in `registry`
    #[must_use]
    pub fn with_registry(name: &str, registry: Arc<LoggerRegistry>) -> Self {
        let name = registry.register(name);
        Self {
            name,
            registry,
            threshold: Severity::Debug,
            pattern: Pattern::default(),
            policy: FormattingPolicy::new(),
            section_depth: 0,
            sinks: Vec::new(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Logger writing to a colored stdout sink
    #[must_use]
    pub fn console(name: &str) -> Self {
        let mut logger = Self::new(name);
        logger.add_stdout_sink(true);
        logger
    }

    /// Build a logger from a declarative layout.
    ///
    /// # Errors
    ///
    /// Fails if a sink cannot be opened; no logger is produced in that case.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config.clone()).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current threshold (snapshotted and restored by muting sections)
    pub fn current_level(&self) -> Severity {
        self.threshold
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn section_depth(&self) -> usize {
        self.section_depth
    }

    pub fn formatting_policy(&self) -> &FormattingPolicy {
        &self.policy
    }

    pub fn sinks(&self) -> &[SharedSink] {
        &self.sinks
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity != Severity::Off && severity >= self.threshold
    }

    // ------------------------------------------------------------------
    // Sinks and configuration
    // ------------------------------------------------------------------

    /// Append a sink; it immediately picks up the current threshold and pattern.
    pub fn add_sink(&mut self, sink: SharedSink) {
        self.sinks.push(sink);
        self.reapply_formatting();
    }

    /// Add a flat file sink.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened; the sink list is untouched.
    pub fn add_file_sink(&mut self, path: impl AsRef<Path>, truncate: bool) -> Result<()> {
        let sink = FileSink::new(path, truncate)?;
        self.add_sink(shared(sink));
        Ok(())
    }

    /// Add a size-rotated file sink.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened; the sink list is untouched.
    pub fn add_rotating_file_sink(
        &mut self,
        path: impl AsRef<Path>,
        max_size: u64,
        max_files: usize,
    ) -> Result<()> {
        let sink = RotatingFileSink::new(path, max_size, max_files)?;
        self.add_sink(shared(sink));
        Ok(())
    }

    pub fn add_stdout_sink(&mut self, color: bool) {
        self.add_sink(shared(StdoutSink::with_colors(color)));
    }

    /// Drop every sink. Later log calls still format but write nowhere.
    pub fn remove_all_sinks(&mut self) {
        self.sinks.clear();
    }

    pub fn configure(&mut self, threshold: Severity, pattern: impl Into<Pattern>) {
        self.threshold = threshold;
        self.pattern = pattern.into();
        self.reapply_formatting();
    }

    pub fn set_level(&mut self, threshold: Severity) {
        self.threshold = threshold;
        self.reapply_formatting();
    }

    pub fn set_pattern(&mut self, pattern: impl Into<Pattern>) {
        self.pattern = pattern.into();
        self.reapply_formatting();
    }

    /// Silence everything until [`set_level`](Self::set_level) restores a real threshold.
    pub fn disable_all_levels(&mut self) {
        self.set_level(Severity::Off);
    }

    fn reapply_formatting(&self) {
        for sink in &self.sinks {
            let mut sink = sink.lock();
            sink.set_threshold(self.threshold);
            sink.set_pattern(&self.pattern);
        }
    }

    pub fn flush(&self) -> Result<()> {
        for sink in &self.sinks {
            sink.lock().flush()?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------

    /// Log any `Display` value; pass `format_args!(..)` for templated text.
    ///
    /// The value is only rendered when `severity` passes the threshold.
    ///
    /// # Errors
    ///
    /// Returns a format error if the value's `Display` impl fails; nothing is
    /// written in that case.
    pub fn log<M: fmt::Display>(&mut self, severity: Severity, message: M) -> Result<()> {
        if !self.is_enabled(severity) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let mut text = String::new();
        write!(text, "{}", message)?;
        self.metrics.record_formatted();
        self.dispatch(severity, &text);
        Ok(())
    }

    /// Log text as-is, without any substitution.
    pub fn log_str(&mut self, severity: Severity, message: &str) {
        if !self.is_enabled(severity) {
            self.metrics.record_filtered();
            return;
        }
        self.metrics.record_formatted();
        self.dispatch(severity, message);
    }

    /// Log a runtime template (see [`template::format`]).
    ///
    /// # Errors
    ///
    /// Returns a format error when placeholders and arguments do not match.
    pub fn log_template(
        &mut self,
        severity: Severity,
        template_str: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<()> {
        if !self.is_enabled(severity) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let text = template::format(template_str, args)?;
        self.metrics.record_formatted();
        self.dispatch(severity, &text);
        Ok(())
    }

    fn dispatch(&self, severity: Severity, message: &str) {
        let timestamp = Local::now();

        for line in self.policy.apply(severity, self.section_depth, message) {
            let record = LogRecord::new(severity, &self.name, timestamp, &line);

            for (idx, sink) in self.sinks.iter().enumerate() {
                let mut sink = sink.lock();
                if !sink.should_log(severity) {
                    continue;
                }
                match sink.write(&record) {
                    Ok(()) => {
                        self.metrics.record_written();
                    }
                    Err(e) => {
                        self.metrics.record_sink_failure();
                        eprintln!(
                            "[LOGGER ERROR] Sink #{} '{}' of logger '{}' failed: {}",
                            idx,
                            sink.name(),
                            self.name,
                            e
                        );
                    }
                }
            }
        }
    }

    #[inline]
    pub fn trace<M: fmt::Display>(&mut self, message: M) -> Result<()> {
        self.log(Severity::Trace, message)
    }

    #[inline]
    pub fn debug<M: fmt::Display>(&mut self, message: M) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    #[inline]
    pub fn info<M: fmt::Display>(&mut self, message: M) -> Result<()> {
        self.log(Severity::Info, message)
    }

    #[inline]
    pub fn warn<M: fmt::Display>(&mut self, message: M) -> Result<()> {
        self.log(Severity::Warn, message)
    }

    #[inline]
    pub fn error<M: fmt::Display>(&mut self, message: M) -> Result<()> {
        self.log(Severity::Error, message)
    }

    #[inline]
    pub fn critical<M: fmt::Display>(&mut self, message: M) -> Result<()> {
        self.log(Severity::Critical, message)
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    /// Emit a start marker at info and open a section.
    pub fn start_section<N: fmt::Display>(&mut self, name: N) -> Result<()> {
        self.start_section_at(SECTION_SEVERITY, name)
    }

    /// Emit a start marker at `severity` and open a section.
    ///
    /// The depth grows even when the marker itself is filtered out.
    pub fn start_section_at<N: fmt::Display>(&mut self, severity: Severity, name: N) -> Result<()> {
        let name = render(name)?;
        self.open_section(severity, &name);
        Ok(())
    }

    /// Close the innermost section and emit an end marker at info.
    pub fn end_section<N: fmt::Display>(&mut self, name: N) -> Result<()> {
        self.end_section_at(SECTION_SEVERITY, name)
    }

    /// Close the innermost section and emit an end marker at `severity`.
    ///
    /// At depth zero only the marker is emitted.
    pub fn end_section_at<N: fmt::Display>(&mut self, severity: Severity, name: N) -> Result<()> {
        let name = render(name)?;
        self.close_section(severity, &name);
        Ok(())
    }

    pub(crate) fn open_section(&mut self, severity: Severity, name: &str) {
        let marker = format!("=== start {} === {{", name);
        self.log_str(severity, &marker);
        self.section_depth += 1;
    }

    pub(crate) fn close_section(&mut self, severity: Severity, name: &str) {
        self.section_depth = self.section_depth.saturating_sub(1);
        let marker = format!("===   end {} === }}", name);
        self.log_str(severity, &marker);
    }
}

pub(crate) fn render<D: fmt::Display>(value: D) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", value)?;
    Ok(out)
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_NAME)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold)
            .field("pattern", &self.pattern.as_str())
            .field("section_depth", &self.section_depth)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush logger '{}': {}", self.name, e);
        }
        self.registry.release(&self.name);
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use section_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("worker")
///     .level(Severity::Info)
///     .pattern("[%l] %v")
///     .stdout(false)
///     .build()
///     .expect("stdout sink never fails to open");
///
/// assert_eq!(logger.current_level(), Severity::Info);
/// assert_eq!(logger.sinks().len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    extra_sinks: Vec<SharedSink>,
    registry: Option<Arc<LoggerRegistry>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            extra_sinks: Vec::new(),
            registry: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.pattern = pattern.into();
        self
    }

    /// Add an already constructed sink
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.extra_sinks.push(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stdout(mut self, color: bool) -> Self {
        self.config.sinks.push(SinkConfig::Stdout { color });
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl AsRef<Path>, truncate: bool) -> Self {
        self.config.sinks.push(SinkConfig::File {
            path: path.as_ref().to_path_buf(),
            truncate,
        });
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn rotating_file(mut self, path: impl AsRef<Path>, max_size: u64, max_files: usize) -> Self {
        self.config.sinks.push(SinkConfig::RotatingFile {
            path: path.as_ref().to_path_buf(),
            max_size,
            max_files,
        });
        self
    }

    /// Register the name in `registry` instead of the process-wide one
    #[must_use = "builder methods return a new value"]
    pub fn registry(mut self, registry: Arc<LoggerRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the Logger.
    ///
    /// Sinks described by configuration come first, in order, followed by
    /// sinks passed to [`sink`](Self::sink).
    ///
    /// # Errors
    ///
    /// Fails on an invalid layout or a sink that cannot be opened.
    pub fn build(self) -> Result<Logger> {
        self.config.validate()?;

        // Open everything before registering the name so a failure leaves no trace.
        let mut sinks = Vec::with_capacity(self.config.sinks.len() + self.extra_sinks.len());
        for sink_config in &self.config.sinks {
            sinks.push(sink_config.open()?);
        }
        sinks.extend(self.extra_sinks);

        let registry = self.registry.unwrap_or_else(LoggerRegistry::global);
        let mut logger = Logger::with_registry(&self.config.name, registry);
        logger.threshold = self.config.level;
        logger.pattern = Pattern::new(self.config.pattern);
        logger.sinks = sinks;
        logger.reapply_formatting();
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
