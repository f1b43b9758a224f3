//! Reading section logs back
//!
//! Output written with the default pattern (`[%H:%M:%S.%f] [%l] %v`) carries
//! enough structure to rebuild the section tree: every line has a timestamp
//! and a label, and section markers delimit nested scopes. [`parse_str`] and
//! [`parse_file`] turn such output into a [`LogSection`] rooted at `root`.
//!
//! ```
//! use section_logger::parse;
//!
//! let text = "\
//! [10:00:00.000000] [info]     === start load === {
//! [10:00:00.250000] [debug]    | 3 rows
//! [10:00:01.000000] [info]     ===   end load === }
//! ";
//! let root = parse::parse_str(text)?;
//! let load = root.sections().next().unwrap();
//! assert_eq!(load.name, "load");
//! assert_eq!(load.duration().unwrap().num_milliseconds(), 1000);
//! assert_eq!(load.messages().next().unwrap().message, "3 rows");
//! # Ok::<(), section_logger::LoggerError>(())
//! ```

use crate::core::{FormattingPolicy, LoggerError, Result, Severity};
use chrono::{Duration, NaiveTime};
use std::fs;
use std::path::Path;

pub const ROOT_SECTION_NAME: &str = "root";

const TIME_FORMAT: &str = "%H:%M:%S%.f";
const START_PREFIX: &str = "=== start ";
const START_SUFFIX: &str = " === {";
const END_PREFIX: &str = "===   end ";
const END_SUFFIX: &str = " === }";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub timestamp: NaiveTime,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogNode {
    Section(LogSection),
    Message(LogMessage),
}

/// A section and everything logged inside it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSection {
    pub name: String,
    /// 0 for the root, 1 for top-level sections
    pub depth: usize,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub children: Vec<LogNode>,
}

impl LogSection {
    fn new(name: impl Into<String>, depth: usize, start_time: Option<NaiveTime>) -> Self {
        Self {
            name: name.into(),
            depth,
            start_time,
            end_time: None,
            children: Vec::new(),
        }
    }

    /// Time between the start and end markers.
    ///
    /// A section whose end lies before its start is taken to span midnight.
    pub fn duration(&self) -> Option<Duration> {
        let (start, end) = (self.start_time?, self.end_time?);
        let elapsed = end.signed_duration_since(start);
        if elapsed < Duration::zero() {
            Some(elapsed + Duration::days(1))
        } else {
            Some(elapsed)
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &LogSection> {
        self.children.iter().filter_map(|node| match node {
            LogNode::Section(section) => Some(section),
            LogNode::Message(_) => None,
        })
    }

    pub fn messages(&self) -> impl Iterator<Item = &LogMessage> {
        self.children.iter().filter_map(|node| match node {
            LogNode::Message(message) => Some(message),
            LogNode::Section(_) => None,
        })
    }

    /// Depth-first search for the first section called `name`
    pub fn find(&self, name: &str) -> Option<&LogSection> {
        self.sections()
            .find_map(|s| if s.name == name { Some(s) } else { s.find(name) })
    }
}

enum Body<'a> {
    Start(&'a str),
    End(&'a str),
    Text(&'a str),
}

struct ParsedLine<'a> {
    timestamp: NaiveTime,
    severity: Severity,
    /// Everything after the label, padding and indentation included
    body: &'a str,
}

pub fn parse_str(text: &str) -> Result<LogSection> {
    parse_str_with(text, |message| message.to_string())
}

/// Parse, rewriting every message body through `transform`.
///
/// Section names are left untouched.
pub fn parse_str_with<F>(text: &str, mut transform: F) -> Result<LogSection>
where
    F: FnMut(&str) -> String,
{
    let policy = FormattingPolicy::new();
    let mut stack = vec![LogSection::new(ROOT_SECTION_NAME, 0, None)];
    let mut last_seen: Option<NaiveTime> = None;

    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let line = parse_line(raw, index + 1)?;

        if stack[0].start_time.is_none() {
            stack[0].start_time = Some(line.timestamp);
        }
        last_seen = Some(line.timestamp);

        match classify(&policy, &stack, line.severity, line.body) {
            Body::Start(name) => {
                let depth = stack.len();
                stack.push(LogSection::new(name, depth, Some(line.timestamp)));
            }
            Body::End(name) => {
                // Only the innermost open section can be closed; anything
                // else is an unmatched marker.
                let matches = stack.len() > 1 && stack.last().is_some_and(|s| s.name == name);
                if matches {
                    close_innermost(&mut stack, line.timestamp);
                }
            }
            Body::Text(message) => {
                if let Some(current) = stack.last_mut() {
                    current.children.push(LogNode::Message(LogMessage {
                        timestamp: line.timestamp,
                        severity: line.severity,
                        message: transform(message),
                    }));
                }
            }
        }
    }

    if let Some(end) = last_seen {
        while stack.len() > 1 {
            close_innermost(&mut stack, end);
        }
    }

    let mut root = stack.remove(0);
    root.end_time = last_seen;
    Ok(root)
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<LogSection> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        LoggerError::io_operation(
            "read log file",
            format!("Failed to read '{}'", path.display()),
            e,
        )
    })?;
    parse_str(&text)
}

fn close_innermost(stack: &mut Vec<LogSection>, end: NaiveTime) {
    if let Some(mut section) = stack.pop() {
        section.end_time = Some(end);
        if let Some(parent) = stack.last_mut() {
            parent.children.push(LogNode::Section(section));
        }
    }
}

fn parse_line(raw: &str, line_no: usize) -> Result<ParsedLine<'_>> {
    let rest = raw
        .strip_prefix('[')
        .ok_or_else(|| LoggerError::parse(line_no, "missing timestamp"))?;
    let (time, rest) = rest
        .split_once("] [")
        .ok_or_else(|| LoggerError::parse(line_no, "missing severity label"))?;
    let timestamp = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|e| LoggerError::parse(line_no, format!("bad timestamp '{}': {}", time, e)))?;

    let (label, body) = match rest.split_once("] ") {
        Some(parts) => parts,
        None => rest
            .strip_suffix(']')
            .map(|label| (label, ""))
            .ok_or_else(|| LoggerError::parse(line_no, "unterminated severity label"))?,
    };
    let severity = strip_ansi(label)
        .parse::<Severity>()
        .map_err(|e| LoggerError::parse(line_no, e))?;

    Ok(ParsedLine {
        timestamp,
        severity,
        body,
    })
}

/// Remove the prefix the logger wrote in front of `body` and classify the rest.
///
/// Body lines and start markers carry one indent per open section. End
/// markers carry one less, since the section is closed before its marker is
/// written. Only that exact amount is removed, so message text that itself
/// starts with spaces or `"| "` survives.
fn classify<'a>(
    policy: &FormattingPolicy,
    stack: &[LogSection],
    severity: Severity,
    body: &'a str,
) -> Body<'a> {
    let body = strip_repeated(body, " ", policy.padding(severity));
    let open = stack.len().saturating_sub(1);

    let at_parent = strip_repeated(body, policy.indent_unit(), open.saturating_sub(1));
    if let Some(name) = end_marker(at_parent) {
        return Body::End(name);
    }

    let at_depth = strip_repeated(body, policy.indent_unit(), open);
    match start_marker(at_depth) {
        Some(name) => Body::Start(name),
        None => Body::Text(at_depth),
    }
}

fn start_marker(body: &str) -> Option<&str> {
    body.strip_prefix(START_PREFIX)?.strip_suffix(START_SUFFIX)
}

fn end_marker(body: &str) -> Option<&str> {
    body.strip_prefix(END_PREFIX)?.strip_suffix(END_SUFFIX)
}

/// Strip up to `count` leading copies of `unit`.
fn strip_repeated<'a>(mut text: &'a str, unit: &str, count: usize) -> &'a str {
    for _ in 0..count {
        match text.strip_prefix(unit) {
            Some(rest) => text = rest,
            None => break,
        }
    }
    text
}

/// Drop SGR escape sequences left by colored console output.
fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
