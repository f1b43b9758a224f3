//! Sink trait for log output destinations

use super::{error::Result, log_record::LogRecord, pattern::Pattern, severity::Severity};
use parking_lot::Mutex;
use std::sync::Arc;

/// A destination for formatted log lines.
///
/// The logger owns none of its sinks' internals; it only pushes its current
/// threshold and pattern into them (eagerly, whenever either changes or a sink
/// is added) and hands them one [`LogRecord`] per physical line.
pub trait Sink: Send {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn set_threshold(&mut self, threshold: Severity);
    fn threshold(&self) -> Severity;
    fn set_pattern(&mut self, pattern: &Pattern);
    fn pattern(&self) -> &Pattern;
    fn name(&self) -> &str;

    #[inline]
    fn should_log(&self, severity: Severity) -> bool {
        severity != Severity::Off && severity >= self.threshold()
    }
}

/// Shared handle to a sink. Callers may keep a clone to inspect the sink.
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// Wrap a sink into a shareable handle.
///
/// The returned `Arc<Mutex<S>>` coerces to [`SharedSink`] when passed to
/// [`Logger::add_sink`](super::Logger::add_sink), while the caller keeps the
/// concrete type for inspection.
pub fn shared<S: Sink + 'static>(sink: S) -> Arc<Mutex<S>> {
    Arc::new(Mutex::new(sink))
}
