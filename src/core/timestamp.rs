//! Timestamp formatting for the `log-date-format` option
//!
//! Patterns containing `%` are strftime patterns and go to chrono unchanged.
//! Anything else is read with PHP `date()` tokens, which is where the default
//! `H:i:s` comes from: `H` hour, `i` minute, `s` second, `\` escapes the next
//! character.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write};

/// Width of the placeholder used instead of a timestamp on framing lines.
pub const BLANK_TIMESTAMP: &str = "        ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    strftime: String,
}

impl DateFormat {
    /// Compile a date pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use eggshell::DateFormat;
    ///
    /// let format = DateFormat::new("H:i:s").unwrap();
    /// assert_eq!(format.strftime(), "%H:%M:%S");
    ///
    /// let format = DateFormat::new("%Y-%m-%d").unwrap();
    /// assert_eq!(format.strftime(), "%Y-%m-%d");
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let strftime = if pattern.contains('%') {
            pattern.to_string()
        } else {
            php_to_strftime(pattern)
        };

        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "log-date-format",
                format!("unsupported date pattern '{}'", pattern),
            ));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            strftime,
        })
    }

    /// The pattern as it was configured
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The equivalent strftime pattern
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::new();
        // Items were validated in `new`; a failure here still must not panic.
        if write!(out, "{}", datetime.format(&self.strftime)).is_err() {
            return self.pattern.clone();
        }
        out
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: "H:i:s".to_string(),
            strftime: "%H:%M:%S".to_string(),
        }
    }
}

fn php_to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        let token = match c {
            'd' => "%d",
            'D' => "%a",
            'j' => "%-d",
            'l' => "%A",
            'N' => "%u",
            'w' => "%w",
            'W' => "%V",
            'F' => "%B",
            'm' => "%m",
            'M' => "%b",
            'n' => "%-m",
            'Y' => "%Y",
            'y' => "%y",
            'a' => "%P",
            'A' => "%p",
            'g' => "%-I",
            'G' => "%-H",
            'h' => "%I",
            'H' => "%H",
            'i' => "%M",
            's' => "%S",
            'u' => "%6f",
            'v' => "%3f",
            'e' | 'T' => "%Z",
            'O' => "%z",
            'P' => "%:z",
            'U' => "%s",
            'c' => "%Y-%m-%dT%H:%M:%S%:z",
            'r' => "%a, %d %b %Y %H:%M:%S %z",
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
                continue;
            }
            other => {
                out.push(other);
                continue;
            }
        };
        out.push_str(token);
    }

    out
}
