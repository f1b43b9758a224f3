//! Bitmask-filtered loggers
//!
//! [`LevelLogger`] filters by independent per-severity bits (a [`LevelSet`])
//! instead of an ordered threshold, and leaves the actual output to the
//! implementor. [`ConsoleLogger`] writes colored, optionally name-prefixed
//! lines with section indentation; [`RateLimitedLogger`] couples any
//! `LevelLogger` to a [`RateGate`].

use super::error::Result;
use super::formatting::FormattingPolicy;
use super::level_set::LevelSet;
use super::logger::render;
use super::rate_gate::{GateState, RateGate};
use super::severity::Severity;
use colored::Colorize;
use std::fmt;
use std::io::{self, Stdout, Write};
use std::time::Instant;

/// Logging capability filtered by a [`LevelSet`].
///
/// Implementors supply the level set and [`write_message`](Self::write_message);
/// the leveled methods check the bit for their severity before any formatting.
pub trait LevelLogger {
    fn levels(&self) -> &LevelSet;
    fn levels_mut(&mut self) -> &mut LevelSet;

    /// Emit an already formatted message.
    fn write_message(&mut self, severity: Severity, message: &str) -> Result<()>;

    fn enable_level(&mut self, severity: Severity) {
        self.levels_mut().enable(severity);
    }

    fn disable_level(&mut self, severity: Severity) {
        self.levels_mut().disable(severity);
    }

    fn enable_all_levels(&mut self) {
        self.levels_mut().enable_all();
    }

    fn disable_all_levels(&mut self) {
        self.levels_mut().disable_all();
    }

    fn is_level_enabled(&self, severity: Severity) -> bool {
        self.levels().is_enabled(severity)
    }

    fn log(&mut self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.is_level_enabled(severity) {
            return Ok(());
        }
        let message = render(args)?;
        self.write_message(severity, &message)
    }

    /// Log text as-is, without substitution
    fn log_str(&mut self, severity: Severity, message: &str) -> Result<()> {
        if !self.is_level_enabled(severity) {
            return Ok(());
        }
        self.write_message(severity, message)
    }

    fn trace(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Trace, args)
    }

    fn debug(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Debug, args)
    }

    fn info(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Info, args)
    }

    fn warn(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Warn, args)
    }

    fn error(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Error, args)
    }

    fn critical(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Critical, args)
    }
}

/// Severity at which [`ConsoleLogger`] section markers are written.
pub const CONSOLE_SECTION_SEVERITY: Severity = Severity::Debug;

/// Console writer with colored labels, an optional name prefix and sections.
///
/// Output lines look like `[name] [info]     | message`: the label is padded
/// to the widest label and followed by one `"| "` per open section.
///
/// # Example
///
/// ```
/// use section_logger::core::{ConsoleLogger, LevelLogger, Severity};
///
/// let mut console = ConsoleLogger::new(Vec::new()).with_colors(false).with_name("net");
/// console.disable_level(Severity::Debug);
/// console.debug(format_args!("hidden"))?;
/// console.warn(format_args!("{} retries left", 2))?;
///
/// let out = String::from_utf8(console.into_inner()).unwrap();
/// assert_eq!(out, "[net] [warn]     2 retries left\n");
/// # Ok::<(), section_logger::LoggerError>(())
/// ```
pub struct ConsoleLogger<W: Write = Stdout> {
    name: Option<String>,
    writer: W,
    levels: LevelSet,
    use_colors: bool,
    policy: FormattingPolicy,
    section_depth: usize,
}

impl ConsoleLogger<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            name: None,
            writer,
            levels: LevelSet::all(),
            use_colors: true,
            policy: FormattingPolicy::new(),
            section_depth: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn section_depth(&self) -> usize {
        self.section_depth
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a start marker at debug and open a section.
    pub fn start_section<N: fmt::Display>(&mut self, name: N) -> Result<()> {
        let name = render(name)?;
        let marker = format!("=== start {} === {{", name);
        self.log_str(CONSOLE_SECTION_SEVERITY, &marker)?;
        self.section_depth += 1;
        Ok(())
    }

    /// Close the innermost section and write an end marker at debug.
    pub fn end_section<N: fmt::Display>(&mut self, name: N) -> Result<()> {
        let name = render(name)?;
        self.section_depth = self.section_depth.saturating_sub(1);
        let marker = format!("===   end {} === }}", name);
        self.log_str(CONSOLE_SECTION_SEVERITY, &marker)
    }
}

impl<W: Write> LevelLogger for ConsoleLogger<W> {
    fn levels(&self) -> &LevelSet {
        &self.levels
    }

    fn levels_mut(&mut self) -> &mut LevelSet {
        &mut self.levels
    }

    fn write_message(&mut self, severity: Severity, message: &str) -> Result<()> {
        let label = if self.use_colors {
            severity.label().color(severity.color_code()).to_string()
        } else {
            severity.label().to_string()
        };

        for line in self.policy.apply(severity, self.section_depth, message) {
            match &self.name {
                Some(name) => writeln!(self.writer, "[{}] [{}] {}", name, label, line)?,
                None => writeln!(self.writer, "[{}] {}", label, line)?,
            }
        }
        Ok(())
    }
}

impl<W: Write> fmt::Debug for ConsoleLogger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("name", &self.name)
            .field("levels", &self.levels)
            .field("use_colors", &self.use_colors)
            .field("section_depth", &self.section_depth)
            .finish()
    }
}

/// A [`LevelLogger`] switched on and off by a [`RateGate`].
pub struct RateLimitedLogger<L: LevelLogger> {
    inner: L,
    gate: RateGate,
}

impl<L: LevelLogger> RateLimitedLogger<L> {
    /// # Errors
    ///
    /// Returns a configuration error for any frequency [`RateGate::new`] rejects.
    pub fn new(inner: L, max_frequency_hz: f64) -> Result<Self> {
        Ok(Self {
            inner,
            gate: RateGate::new(max_frequency_hz)?,
        })
    }

    pub fn with_gate(inner: L, gate: RateGate) -> Self {
        Self { inner, gate }
    }

    pub fn tick(&mut self) -> GateState {
        self.gate.tick(&mut self.inner)
    }

    pub fn tick_at(&mut self, now: Instant) -> GateState {
        self.gate.tick_at(now, &mut self.inner)
    }

    pub fn gate(&self) -> &RateGate {
        &self.gate
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut L {
        &mut self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: LevelLogger> LevelLogger for RateLimitedLogger<L> {
    fn levels(&self) -> &LevelSet {
        self.inner.levels()
    }

    fn levels_mut(&mut self) -> &mut LevelSet {
        self.inner.levels_mut()
    }

    fn write_message(&mut self, severity: Severity, message: &str) -> Result<()> {
        self.inner.write_message(severity, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn plain() -> ConsoleLogger<Vec<u8>> {
        ConsoleLogger::new(Vec::new()).with_colors(false)
    }

    fn output(logger: &ConsoleLogger<Vec<u8>>) -> String {
        String::from_utf8(logger.writer().clone()).unwrap()
    }

    #[test]
    fn test_all_levels_enabled_by_default() {
        let mut logger = plain();
        logger.trace(format_args!("t")).unwrap();
        logger.critical(format_args!("c")).unwrap();
        assert_eq!(output(&logger), "[trace]    t\n[critical] c\n");
    }

    #[test]
    fn test_independent_level_bits() {
        let mut logger = plain();
        logger.disable_all_levels();
        logger.enable_level(Severity::Trace);
        logger.enable_level(Severity::Error);

        logger.debug(format_args!("no")).unwrap();
        logger.critical(format_args!("no")).unwrap();
        logger.trace(format_args!("yes")).unwrap();
        logger.error(format_args!("yes")).unwrap();

        assert_eq!(output(&logger), "[trace]    yes\n[error]    yes\n");
        assert!(!logger.is_level_enabled(Severity::Info));
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        struct Panics;
        impl fmt::Display for Panics {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("formatted a disabled message");
            }
        }

        let mut logger = plain();
        logger.disable_level(Severity::Info);
        logger.info(format_args!("{}", Panics)).unwrap();
        assert!(output(&logger).is_empty());
    }

    #[test]
    fn test_sections_write_at_debug() {
        let mut logger = plain().with_name("app");
        logger.start_section("load").unwrap();
        logger.info(format_args!("a\nb")).unwrap();
        logger.end_section("load").unwrap();

        assert_eq!(
            output(&logger),
            "[app] [debug]    === start load === {\n\
             [app] [info]     | a\n\
             [app] [info]     | b\n\
             [app] [debug]    ===   end load === }\n"
        );
    }

    #[test]
    fn test_section_markers_follow_debug_bit() {
        let mut logger = plain();
        logger.disable_level(Severity::Debug);
        logger.start_section("quiet").unwrap();
        assert_eq!(logger.section_depth(), 1);
        logger.end_section("quiet").unwrap();
        logger.end_section("extra").unwrap();
        assert_eq!(logger.section_depth(), 0);
        assert!(output(&logger).is_empty());
    }

    #[test]
    fn test_rate_limited_logger_toggles_levels() {
        let start = Instant::now();
        let gate = RateGate::starting_at(2.0, start).unwrap();
        let mut logger = RateLimitedLogger::with_gate(plain(), gate);

        assert_eq!(logger.tick_at(start + Duration::from_millis(10)), GateState::Throttled);
        logger.warn(format_args!("dropped")).unwrap();
        assert!(logger.levels().is_empty());

        assert_eq!(logger.tick_at(start + Duration::from_millis(600)), GateState::Armed);
        logger.warn(format_args!("kept")).unwrap();
        assert!(logger.levels().is_full());

        assert_eq!(output(logger.inner()), "[warn]     kept\n");
    }

    #[test]
    fn test_rate_limited_rejects_bad_frequency() {
        assert!(RateLimitedLogger::new(plain(), 0.0).is_err());
        assert!(RateLimitedLogger::new(plain(), 1e-20).is_err());
    }
}
