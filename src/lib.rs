//! # Section Logger
//!
//! Severity-filtered logging to console and files, with nestable sections
//! that indent everything logged inside them.
//!
//! ## Features
//!
//! - **Sections**: start/end markers and `"| "` indentation per nesting level,
//!   with RAII guards that close or unmute on scope exit
//! - **Multiple Sinks**: colored stdout, plain files, size-rotated files and
//!   in-memory capture, all sharing one threshold and pattern
//! - **Lazy Formatting**: messages below the threshold are never rendered
//! - **Bitmask Loggers**: per-level enable bits and a frequency gate for
//!   per-frame logging
//! - **Log Parsing**: rebuild the section tree from written output

pub mod core;
pub mod macros;
pub mod parse;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        shared, ConsoleLogger, GateState, LevelLogger, LevelSet, LogRecord, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, Pattern, RateGate,
        RateLimitedLogger, Result, ScopedSection, Severity, SharedSink, Sink, SinkConfig,
    };
    pub use crate::sinks::{FileSink, MemorySink, RotatingFileSink, StdoutSink};
}

pub use crate::core::{
    shared, ConsoleLogger, GateState, LevelLogger, LevelSet, LogRecord, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, Pattern, RateGate,
    RateLimitedLogger, Result, ScopedSection, Severity, SharedSink, Sink, SinkConfig,
};
pub use crate::sinks::{FileSink, MemorySink, RotatingFileSink, StdoutSink};
