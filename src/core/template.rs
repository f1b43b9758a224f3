//! Runtime message templates
//!
//! Compile-time templates go through `format_args!` and are checked by the
//! compiler. Templates only known at runtime (read from configuration, built
//! by callers) are substituted here, where a mismatch between placeholders and
//! arguments surfaces as [`LoggerError::Format`].
//!
//! Supported syntax:
//!
//! - `{}` takes the next argument in order
//! - `{N}` takes argument `N` (zero-based)
//! - `{{` and `}}` are literal braces
//!
//! Every argument must be referenced at least once.

use super::error::{LoggerError, Result};
use std::fmt::{Display, Write};

/// Substitute `args` into `template`.
///
/// # Examples
///
/// ```
/// use section_logger::core::template;
///
/// let out = template::format("{} of {}", &[&3, &5]).unwrap();
/// assert_eq!(out, "3 of 5");
///
/// assert!(template::format("{} of {}", &[&3]).is_err());
/// ```
pub fn format(template: &str, args: &[&dyn Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut used = vec![false; args.len()];
    let mut next = 0usize;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut spec = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    spec.push(c);
                }
                if !closed {
                    return Err(LoggerError::format(format!(
                        "unclosed placeholder at byte {} in {:?}",
                        pos, template
                    )));
                }

                let index = if spec.is_empty() {
                    let i = next;
                    next += 1;
                    i
                } else {
                    spec.trim().parse::<usize>().map_err(|_| {
                        LoggerError::format(format!(
                            "invalid placeholder {{{}}} in {:?}",
                            spec, template
                        ))
                    })?
                };

                let arg = args.get(index).ok_or_else(|| {
                    LoggerError::format(format!(
                        "placeholder refers to argument {} but only {} given for {:?}",
                        index,
                        args.len(),
                        template
                    ))
                })?;
                used[index] = true;
                write!(out, "{}", arg)?;
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(LoggerError::format(format!(
                        "unmatched '}}' at byte {} in {:?}",
                        pos, template
                    )));
                }
            }
            c => out.push(c),
        }
    }

    if let Some(unused) = used.iter().position(|u| !u) {
        return Err(LoggerError::format(format!(
            "argument {} is never used by {:?}",
            unused, template
        )));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_and_positional() {
        assert_eq!(format("a {} b {}", &[&1, &"x"]).unwrap(), "a 1 b x");
        assert_eq!(format("{1}-{0}-{1}", &[&"l", &"r"]).unwrap(), "r-l-r");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(format("{{}} {}", &[&7]).unwrap(), "{} 7");
        assert_eq!(format("=== end x === }}", &[]).unwrap(), "=== end x === }");
    }

    #[test]
    fn test_no_placeholders_no_args() {
        assert_eq!(format("plain text", &[]).unwrap(), "plain text");
    }

    #[test]
    fn test_too_few_arguments() {
        let err = format("{} and {}", &[&1]).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_unused_argument() {
        let err = format("only {}", &[&1, &2]).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("argument 1"));
    }

    #[test]
    fn test_malformed_braces() {
        assert!(format("open {", &[]).is_err());
        assert!(format("close }", &[]).is_err());
        assert!(format("{name}", &[&1]).is_err());
    }
}
