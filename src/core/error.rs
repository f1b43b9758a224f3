//! Error types for the section logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Template and arguments disagree, or a `Display` impl failed
    #[error("Format error: {message}")]
    Format { message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decode error (configuration)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File sink error with path
    #[error("File sink error for '{path}': {message}")]
    FileSink { path: String, message: String },

    /// File rotation error
    #[error("File rotation failed for '{path}': {message}")]
    FileRotation { path: String, message: String },

    /// Malformed log text handed to the reader
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl LoggerError {
    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        LoggerError::Format {
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileSink {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file rotation error
    pub fn file_rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileRotation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        LoggerError::Parse {
            line,
            message: message.into(),
        }
    }

    /// True for errors raised by the message formatting step
    pub fn is_format(&self) -> bool {
        matches!(self, LoggerError::Format { .. })
    }
}

impl From<std::fmt::Error> for LoggerError {
    fn from(_: std::fmt::Error) -> Self {
        LoggerError::format("a formatting trait implementation returned an error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::format("missing argument");
        assert!(err.is_format());

        let err = LoggerError::config("RateGate", "frequency must be positive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_sink("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LoggerError::FileSink { .. }));
        assert!(!err.is_format());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::format("2 placeholders but 1 argument");
        assert_eq!(err.to_string(), "Format error: 2 placeholders but 1 argument");

        let err = LoggerError::file_rotation("/var/log/app.log", "Disk full");
        assert_eq!(
            err.to_string(),
            "File rotation failed for '/var/log/app.log': Disk full"
        );

        let err = LoggerError::parse(7, "missing timestamp");
        assert_eq!(err.to_string(), "Parse error on line 7: missing timestamp");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open file"));
    }

    #[test]
    fn test_fmt_error_maps_to_format() {
        let err: LoggerError = std::fmt::Error.into();
        assert!(err.is_format());
    }
}
