//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a logger (name, threshold, pattern) and the
//! sinks it writes to. It deserializes from JSON, so a logger layout can live
//! in a file next to the application:
//!
//! ```json
//! {
//!   "name": "importer",
//!   "level": "info",
//!   "pattern": "[%H:%M:%S.%f] [%^%l%$] %v",
//!   "sinks": [
//!     { "type": "stdout", "color": true },
//!     { "type": "rotating_file", "path": "logs/importer.log", "max_size": 1048576, "max_files": 3 }
//!   ]
//! }
//! ```

use super::error::{LoggerError, Result};
use super::pattern::DEFAULT_PATTERN;
use super::severity::Severity;
use super::sink::{shared, SharedSink};
use crate::sinks::{FileSink, RotatingFileSink, StdoutSink};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name used when none is given
pub const DEFAULT_LOGGER_NAME: &str = "section_logger";

fn default_color() -> bool {
    true
}

/// One output destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SinkConfig {
    /// Standard output, optionally colored
    Stdout {
        #[serde(default = "default_color")]
        color: bool,
    },

    /// Flat file, appended to unless `truncate` is set
    File {
        path: PathBuf,
        #[serde(default)]
        truncate: bool,
    },

    /// File rotated once it would grow past `max_size` bytes, keeping `max_files` backups
    RotatingFile {
        path: PathBuf,
        max_size: u64,
        max_files: usize,
    },
}

impl SinkConfig {
    /// Open the destination described by this entry.
    ///
    /// # Errors
    ///
    /// Returns an IO error if a file cannot be created or opened, or a
    /// configuration error for an unusable rotation setting.
    pub fn open(&self) -> Result<SharedSink> {
        let sink: SharedSink = match self {
            SinkConfig::Stdout { color } => shared(StdoutSink::with_colors(*color)),
            SinkConfig::File { path, truncate } => shared(FileSink::new(path, *truncate)?),
            SinkConfig::RotatingFile {
                path,
                max_size,
                max_files,
            } => shared(RotatingFileSink::new(path, *max_size, *max_files)?),
        };
        Ok(sink)
    }
}

/// Logger layout: identity, threshold, pattern and sinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub level: Severity,
    pub pattern: String,
    pub sinks: Vec<SinkConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            level: Severity::Debug,
            pattern: DEFAULT_PATTERN.to_string(),
            sinks: Vec::new(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("Failed to read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&text)
    }

    /// Reject layouts that could never produce a working logger
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LoggerError::config("LoggerConfig", "logger name must not be empty"));
        }
        for sink in &self.sinks {
            if let SinkConfig::RotatingFile { max_size, .. } = sink {
                if *max_size == 0 {
                    return Err(LoggerError::config(
                        "RotatingFileSink",
                        "max_size must be greater than zero",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, DEFAULT_LOGGER_NAME);
        assert_eq!(config.level, Severity::Debug);
        assert_eq!(config.pattern, DEFAULT_PATTERN);
        assert!(config.sinks.is_empty());
    }

    #[test]
    fn test_from_json_partial() {
        let config = LoggerConfig::from_json(r#"{ "name": "svc", "level": "warning" }"#)
            .expect("valid config");
        assert_eq!(config.name, "svc");
        assert_eq!(config.level, Severity::Warn);
        assert_eq!(config.pattern, DEFAULT_PATTERN);
    }

    #[test]
    fn test_sink_entries() {
        let json = r#"{
            "sinks": [
                { "type": "stdout" },
                { "type": "file", "path": "out.log", "truncate": true },
                { "type": "rotating_file", "path": "r.log", "max_size": 10, "max_files": 2 }
            ]
        }"#;
        let config = LoggerConfig::from_json(json).expect("valid config");
        assert_eq!(
            config.sinks,
            vec![
                SinkConfig::Stdout { color: true },
                SinkConfig::File {
                    path: PathBuf::from("out.log"),
                    truncate: true
                },
                SinkConfig::RotatingFile {
                    path: PathBuf::from("r.log"),
                    max_size: 10,
                    max_files: 2
                },
            ]
        );
    }

    #[test]
    fn test_invalid_json_and_values() {
        assert!(matches!(
            LoggerConfig::from_json("{ not json"),
            Err(LoggerError::Json(_))
        ));
        assert!(LoggerConfig::from_json(r#"{ "level": "loud" }"#).is_err());
        assert!(matches!(
            LoggerConfig::from_json(r#"{ "name": "" }"#),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        let zero = r#"{ "sinks": [{ "type": "rotating_file", "path": "r.log", "max_size": 0, "max_files": 1 }] }"#;
        assert!(LoggerConfig::from_json(zero).is_err());
    }
}
