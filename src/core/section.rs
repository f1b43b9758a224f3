//! Scoped sections
//!
//! [`ScopedSection`] ties a section (or a stretch of silence) to a lexical
//! scope. Whatever it did on construction is undone exactly once when it is
//! dropped, including during unwinding.

use super::error::Result;
use super::logger::{render, Logger, SECTION_SEVERITY};
use super::severity::Severity;
use std::fmt;
use std::ops::{Deref, DerefMut};

enum SectionMode {
    /// Opened a section; closes it under the same name.
    Nesting { severity: Severity, name: String },
    /// Silenced the logger; restores this threshold.
    Muting { restore: Severity },
}

/// Guard that nests or mutes a [`Logger`] for the lifetime of a scope.
///
/// The guard borrows the logger mutably and dereferences to it, so the work
/// inside the scope logs through the guard. Nested guards borrow the outer one.
///
/// # Example
///
/// ```
/// use section_logger::prelude::*;
///
/// let capture = shared(MemorySink::new());
/// let mut logger = Logger::with_registry("scoped", LoggerRegistry::new().into());
/// logger.add_sink(capture.clone());
///
/// {
///     let mut outer = ScopedSection::new(&mut logger, "outer")?;
///     outer.info("step")?;
///     {
///         let mut quiet = ScopedSection::muted(&mut outer);
///         quiet.critical("never written")?;
///     }
///     outer.info("after the quiet part")?;
/// }
///
/// assert_eq!(logger.section_depth(), 0);
/// assert_eq!(capture.lock().len(), 4);
/// # Ok::<(), section_logger::LoggerError>(())
/// ```
#[must_use = "the section closes as soon as the guard is dropped"]
pub struct ScopedSection<'a> {
    logger: &'a mut Logger,
    mode: SectionMode,
}

impl<'a> ScopedSection<'a> {
    /// Open a section logged at info.
    ///
    /// The name is rendered once here and reused verbatim for the end marker.
    pub fn new<N: fmt::Display>(logger: &'a mut Logger, name: N) -> Result<Self> {
        Self::at(logger, SECTION_SEVERITY, name)
    }

    /// Open a section whose markers are logged at `severity`.
    pub fn at<N: fmt::Display>(logger: &'a mut Logger, severity: Severity, name: N) -> Result<Self> {
        let name = render(name)?;
        logger.open_section(severity, &name);
        Ok(Self {
            logger,
            mode: SectionMode::Nesting { severity, name },
        })
    }

    /// Silence the logger until the guard is dropped, then restore its threshold.
    pub fn muted(logger: &'a mut Logger) -> Self {
        let restore = logger.current_level();
        logger.disable_all_levels();
        Self {
            logger,
            mode: SectionMode::Muting { restore },
        }
    }

    /// Nest when `logging_enabled`, mute otherwise.
    ///
    /// In muting mode the name is not rendered and no markers are emitted.
    pub fn with_logging<N: fmt::Display>(
        logger: &'a mut Logger,
        name: N,
        logging_enabled: bool,
    ) -> Result<Self> {
        if logging_enabled {
            Self::new(logger, name)
        } else {
            Ok(Self::muted(logger))
        }
    }

    /// Section name, or `None` for a muting guard
    pub fn name(&self) -> Option<&str> {
        match &self.mode {
            SectionMode::Nesting { name, .. } => Some(name),
            SectionMode::Muting { .. } => None,
        }
    }

    pub fn is_muted(&self) -> bool {
        matches!(self.mode, SectionMode::Muting { .. })
    }
}

impl Deref for ScopedSection<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        self.logger
    }
}

impl DerefMut for ScopedSection<'_> {
    fn deref_mut(&mut self) -> &mut Logger {
        self.logger
    }
}

impl Drop for ScopedSection<'_> {
    fn drop(&mut self) {
        match &self.mode {
            SectionMode::Nesting { severity, name } => {
                self.logger.close_section(*severity, name);
            }
            SectionMode::Muting { restore } => {
                self.logger.set_level(*restore);
            }
        }
    }
}

impl fmt::Debug for ScopedSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            SectionMode::Nesting { severity, name } => f
                .debug_struct("ScopedSection")
                .field("name", name)
                .field("severity", severity)
                .finish(),
            SectionMode::Muting { restore } => f
                .debug_struct("ScopedSection")
                .field("muted", &true)
                .field("restore", restore)
                .finish(),
        }
    }
}
