//! Rotating file sink
//!
//! Writes to a base file until the next line would push it past `max_size`
//! bytes, then shifts `app.log` → `app.log.1` → `app.log.2` ... keeping at
//! most `max_files` backups. The oldest backup is deleted on each rotation.
//! With `max_files == 0` the base file is truncated in place instead.

use crate::core::{LogRecord, LoggerError, Pattern, Result, Severity, Sink};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Size- and count-bounded file sink
///
/// # Examples
///
/// ```no_run
/// use section_logger::sinks::RotatingFileSink;
///
/// // 5 MiB per file, three backups: app.log, app.log.1 .. app.log.3
/// let sink = RotatingFileSink::new("/var/log/app.log", 5 * 1024 * 1024, 3).unwrap();
/// ```
pub struct RotatingFileSink {
    base_path: PathBuf,
    max_size: u64,
    max_files: usize,
    writer: Option<BufWriter<File>>,
    current_size: u64,
    threshold: Severity,
    pattern: Pattern,
}

impl RotatingFileSink {
    /// Open or create the base file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `max_size == 0` and an IO error if the
    /// file or its directory cannot be created.
    pub fn new(path: impl AsRef<Path>, max_size: u64, max_files: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(LoggerError::config(
                "RotatingFileSink",
                "max_size must be greater than zero",
            ));
        }

        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let (file, current_size) = Self::open_base(&base_path, false)?;

        Ok(Self {
            base_path,
            max_size,
            max_files,
            writer: Some(BufWriter::new(file)),
            current_size,
            threshold: Severity::Trace,
            pattern: Pattern::default(),
        })
    }

    fn open_base(path: &Path, truncate: bool) -> Result<(File, u64)> {
        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let file = options.open(path).map_err(|e| {
            LoggerError::io_operation(
                "open log file",
                format!("Failed to open '{}'", path.display()),
                e,
            )
        })?;

        let size = file
            .metadata()
            .map_err(|e| {
                LoggerError::file_sink(
                    path.display().to_string(),
                    format!("Cannot access file metadata: {}", e),
                )
            })?
            .len();
        Ok((file, size))
    }

    /// Get backup file path for given index
    fn backup_path(&self, index: usize) -> PathBuf {
        let mut path = self.base_path.clone();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.log");
        path.set_file_name(format!("{}.{}", filename, index));
        path
    }

    fn rotate(&mut self) -> Result<()> {
        // Release the handle before renaming the file underneath it.
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        if self.max_files == 0 {
            let (file, _) = Self::open_base(&self.base_path, true)?;
            self.writer = Some(BufWriter::new(file));
            self.current_size = 0;
            return Ok(());
        }

        let oldest = self.backup_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest).map_err(|e| {
                LoggerError::file_rotation(
                    oldest.display().to_string(),
                    format!("Failed to remove oldest backup: {}", e),
                )
            })?;
        }

        for i in (1..self.max_files).rev() {
            let old_path = self.backup_path(i);
            if old_path.exists() {
                let new_path = self.backup_path(i + 1);
                fs::rename(&old_path, &new_path).map_err(|e| {
                    LoggerError::file_rotation(
                        old_path.display().to_string(),
                        format!("Failed to shift backup: {}", e),
                    )
                })?;
            }
        }

        if self.base_path.exists() {
            fs::rename(&self.base_path, self.backup_path(1)).map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to rotate current log file: {}", e),
                )
            })?;
        }

        let (file, size) = Self::open_base(&self.base_path, false)?;
        self.writer = Some(BufWriter::new(file));
        self.current_size = size;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.base_path
    }

    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }
}

impl Sink for RotatingFileSink {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let mut output = self.pattern.render(record, false);
        output.push('\n');
        let len = output.len() as u64;

        if self.current_size > 0 && self.current_size + len > self.max_size {
            if let Err(e) = self.rotate() {
                eprintln!(
                    "[LOGGER WARNING] Log rotation failed: {}. Continuing with current file.",
                    e
                );
                if self.writer.is_none() {
                    let (file, size) = Self::open_base(&self.base_path, false)?;
                    self.writer = Some(BufWriter::new(file));
                    self.current_size = size;
                }
            }
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::file_sink(self.base_path.display().to_string(), "writer not initialized"))?;
        writer.write_all(output.as_bytes()).map_err(|e| {
            LoggerError::file_sink(
                self.base_path.display().to_string(),
                format!("Failed to write log line: {}", e),
            )
        })?;
        self.current_size += len;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
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
        "rotating_file"
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
