//! File sink implementation

use crate::core::{LogRecord, LoggerError, Pattern, Result, Severity, Sink};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes rendered lines to a single file.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    threshold: Severity,
    pattern: Pattern,
}

impl FileSink {
    /// Open `path`, truncating it when `truncate` is set and appending otherwise.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory or the file cannot be created.
    pub fn new(path: impl AsRef<Path>, truncate: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let file = options.open(&path).map_err(|e| {
            LoggerError::io_operation(
                "open log file",
                format!("Failed to open '{}'", path.display()),
                e,
            )
        })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            threshold: Severity::Trace,
            pattern: Pattern::default(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let mut output = self.pattern.render(record, false);
        output.push('\n');
        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
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
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
