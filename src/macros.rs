//! Logging macros for ergonomic log message formatting.
//!
//! These macros take `println!`-style arguments and hand them to the logger as
//! `format_args!`, so nothing is rendered unless the severity passes the
//! logger's filter. They expand to a `log` call returning
//! [`Result`](crate::Result) and work with both [`Logger`](crate::Logger) and
//! any [`LevelLogger`](crate::LevelLogger) (bring the trait into scope).
//!
//! # Examples
//!
//! ```
//! use section_logger::prelude::*;
//! use section_logger::{info, section};
//!
//! let mut logger = Logger::with_registry("macros", LoggerRegistry::new().into());
//!
//! info!(logger, "Server started")?;
//!
//! let port = 8080;
//! {
//!     let mut startup = section!(logger, "bind {}", port)?;
//!     info!(startup, "listening on port {}", port)?;
//! }
//! # Ok::<(), section_logger::LoggerError>(())
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use section_logger::prelude::*;
/// # let mut logger = Logger::with_registry("log", LoggerRegistry::new().into());
/// use section_logger::log;
/// log!(logger, Severity::Info, "Simple message")?;
/// log!(logger, Severity::Error, "Error code: {}", 500)?;
/// # Ok::<(), section_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use section_logger::prelude::*;
/// # let mut logger = Logger::with_registry("info", LoggerRegistry::new().into());
/// use section_logger::info;
/// info!(logger, "Application started")?;
/// info!(logger, "Processing {} items", 100)?;
/// # Ok::<(), section_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Open a [`ScopedSection`](crate::ScopedSection) with a formatted name.
///
/// Evaluates to `Result<ScopedSection>`; the section closes when the guard
/// is dropped.
#[macro_export]
macro_rules! section {
    ($logger:expr, $($arg:tt)+) => {
        $crate::ScopedSection::new(&mut $logger, format_args!($($arg)+))
    };
}
