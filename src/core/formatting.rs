//! Label alignment and section indentation

use super::severity::Severity;

/// Indent emitted once per open section.
pub const SECTION_INDENT: &str = "| ";

/// Computes the prefix placed in front of every physical line of a message.
///
/// The prefix is `pad + indent`: `pad` is enough spaces to bring the severity
/// label up to the width of the widest label, so message bodies line up in a
/// column, and `indent` repeats [`SECTION_INDENT`] once per section depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingPolicy {
    label_width: usize,
    indent_unit: String,
}

impl FormattingPolicy {
    pub fn new() -> Self {
        Self::with_indent(SECTION_INDENT)
    }

    pub fn with_indent(indent_unit: impl Into<String>) -> Self {
        let label_width = Severity::ALL
            .iter()
            .map(|s| s.label().len())
            .max()
            .unwrap_or(0);
        Self {
            label_width,
            indent_unit: indent_unit.into(),
        }
    }

    /// Width of the widest severity label
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    pub fn padding(&self, severity: Severity) -> usize {
        self.label_width.saturating_sub(severity.label().len())
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    pub fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }

    pub fn prefix(&self, severity: Severity, depth: usize) -> String {
        let mut prefix = " ".repeat(self.padding(severity));
        prefix.push_str(&self.indent(depth));
        prefix
    }

    /// Split `message` on line breaks and prefix each physical line.
    ///
    /// An empty message still yields one (prefix-only) line.
    pub fn apply(&self, severity: Severity, depth: usize, message: &str) -> Vec<String> {
        let prefix = self.prefix(severity, depth);
        if message.is_empty() {
            return vec![prefix];
        }
        message
            .lines()
            .map(|line| {
                let mut out = String::with_capacity(prefix.len() + line.len());
                out.push_str(&prefix);
                out.push_str(line);
                out
            })
            .collect()
    }
}

impl Default for FormattingPolicy {
    fn default() -> Self {
        Self::new()
    }
}
