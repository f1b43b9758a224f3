//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log importance.
///
/// The discriminant doubles as the bit index inside a [`LevelSet`](super::LevelSet)
/// and as the filtering threshold of a [`Logger`](super::Logger). `Off` is a
/// sentinel above every real severity: a threshold of `Off` silences all output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace = 0,
    #[default]
    Debug = 1,
    Info = 2,
    #[serde(alias = "warning")]
    Warn = 3,
    #[serde(alias = "err")]
    Error = 4,
    #[serde(alias = "fatal")]
    Critical = 5,
    Off = 6,
}

impl Severity {
    /// Every real severity in ascending order (`Off` excluded).
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Off => "off",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Severity::Trace => "T",
            Severity::Debug => "D",
            Severity::Info => "I",
            Severity::Warn => "W",
            Severity::Error => "E",
            Severity::Critical => "C",
            Severity::Off => "O",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Trace => White,
            Severity::Debug => Cyan,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
            Severity::Critical => BrightRed,
            Severity::Off => White,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" | "err" => Ok(Severity::Error),
            "critical" | "fatal" => Ok(Severity::Critical),
            "off" => Ok(Severity::Off),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
