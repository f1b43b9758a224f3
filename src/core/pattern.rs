//! Output patterns
//!
//! Sinks render every [`LogRecord`] through a [`Pattern`] compiled from a
//! `%`-flag template, so the timestamp/label/message layout is configurable
//! per logger.
//!
//! | flag | expands to |
//! |------|------------|
//! | `%Y` `%m` `%d` | year, month, day |
//! | `%H` `%M` `%S` | hour, minute, second |
//! | `%T` | `%H:%M:%S` |
//! | `%e` `%f` `%F` | milli-, micro-, nanoseconds of the second |
//! | `%l` `%L` | severity label, single-letter label |
//! | `%n` | logger name |
//! | `%v` | the line body |
//! | `%^` `%$` | start and end of the colored range |
//! | `%%` | a literal `%` |
//!
//! Unknown flags are copied to the output unchanged.

use super::log_record::LogRecord;
use colored::Colorize;
use std::fmt;
use std::str::FromStr;

/// `[HH:MM:SS.ffffff] [level] message`
pub const DEFAULT_PATTERN: &str = "[%H:%M:%S.%f] [%^%l%$] %v";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Clock(&'static str),
    Millis,
    Micros,
    Nanos,
    Label,
    ShortLabel,
    Name,
    Body,
    ColorStart,
    ColorEnd,
}

/// A compiled output pattern.
///
/// # Examples
///
/// ```
/// use section_logger::core::{LogRecord, Pattern, Severity};
///
/// let pattern: Pattern = "%n/%l: %v".parse().unwrap();
/// let record = LogRecord::now(Severity::Warn, "svc", "disk almost full");
/// assert_eq!(pattern.render(&record, false), "svc/warn: disk almost full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = Self::compile(&source);
        Self { source, tokens }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn compile(source: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let token = match chars.next() {
                Some('Y') => Token::Clock("%Y"),
                Some('m') => Token::Clock("%m"),
                Some('d') => Token::Clock("%d"),
                Some('H') => Token::Clock("%H"),
                Some('M') => Token::Clock("%M"),
                Some('S') => Token::Clock("%S"),
                Some('T') => Token::Clock("%H:%M:%S"),
                Some('e') => Token::Millis,
                Some('f') => Token::Micros,
                Some('F') => Token::Nanos,
                Some('l') => Token::Label,
                Some('L') => Token::ShortLabel,
                Some('n') => Token::Name,
                Some('v') => Token::Body,
                Some('^') => Token::ColorStart,
                Some('$') => Token::ColorEnd,
                Some('%') => {
                    literal.push('%');
                    continue;
                }
                Some(other) => {
                    literal.push('%');
                    literal.push(other);
                    continue;
                }
                None => {
                    literal.push('%');
                    continue;
                }
            };

            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        tokens
    }

    /// Render `record`; the `%^`..`%$` range is colored only when `color` is set.
    pub fn render(&self, record: &LogRecord<'_>, color: bool) -> String {
        let mut out = String::with_capacity(self.source.len() + record.line.len() + 32);
        // Text collected inside an open color range.
        let mut range: Option<String> = None;

        for token in &self.tokens {
            let target = match range.as_mut() {
                Some(buf) => buf,
                None => &mut out,
            };

            match token {
                Token::Literal(text) => target.push_str(text),
                Token::Clock(spec) => {
                    target.push_str(&record.timestamp.format(spec).to_string());
                }
                Token::Millis => {
                    target.push_str(&format!("{:03}", record.timestamp.timestamp_subsec_millis() % 1000));
                }
                Token::Micros => {
                    target.push_str(&format!(
                        "{:06}",
                        record.timestamp.timestamp_subsec_micros() % 1_000_000
                    ));
                }
                Token::Nanos => {
                    target.push_str(&format!(
                        "{:09}",
                        record.timestamp.timestamp_subsec_nanos() % 1_000_000_000
                    ));
                }
                Token::Label => target.push_str(record.severity.label()),
                Token::ShortLabel => target.push_str(record.severity.short_label()),
                Token::Name => target.push_str(record.logger_name),
                Token::Body => target.push_str(record.line),
                Token::ColorStart => {
                    if color && range.is_none() {
                        range = Some(String::new());
                    }
                }
                Token::ColorEnd => {
                    if let Some(buf) = range.take() {
                        out.push_str(&buf.color(record.severity.color_code()).to_string());
                    }
                }
            }
        }

        if let Some(buf) = range.take() {
            out.push_str(&buf.color(record.severity.color_code()).to_string());
        }
        out
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

impl FromStr for Pattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
