//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatting;
pub mod level_logger;
pub mod level_set;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod pattern;
pub mod rate_gate;
pub mod registry;
pub mod section;
pub mod severity;
pub mod sink;
pub mod template;

pub use config::{LoggerConfig, SinkConfig, DEFAULT_LOGGER_NAME};
pub use error::{LoggerError, Result};
pub use formatting::{FormattingPolicy, SECTION_INDENT};
pub use level_logger::{ConsoleLogger, LevelLogger, RateLimitedLogger, CONSOLE_SECTION_SEVERITY};
pub use level_set::LevelSet;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, SECTION_SEVERITY};
pub use metrics::LoggerMetrics;
pub use pattern::{Pattern, DEFAULT_PATTERN};
pub use rate_gate::{GateState, RateGate};
pub use registry::LoggerRegistry;
pub use section::ScopedSection;
pub use severity::Severity;
pub use sink::{shared, SharedSink, Sink};
