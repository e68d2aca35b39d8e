//! Execution traces
//!
//! A [`StackProbe`] reports the frames of the current call stack, innermost
//! first. The default [`BacktraceProbe`] reads them from
//! [`std::backtrace::Backtrace`]; tests and embedders can plug in their own.

use super::arg::Arg;
use std::backtrace::Backtrace;

/// One call site of a trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub file: Option<String>,
    pub line: Option<u32>,
    /// Owning type or module of the function
    pub class: Option<String>,
    pub function: String,
    /// Argument snapshot, when the probe can see one
    pub args: Vec<Arg>,
}

impl Frame {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            class: None,
            function: function.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_args(mut self, args: Vec<Arg>) -> Self {
        self.args = args;
        self
    }

    /// Fixed-width single line: `<file>#<line> <class>-><function>()`.
    pub fn render(&self) -> String {
        format!(
            "{:>20}#{:<4} {:>12}->{}()",
            self.file.as_deref().unwrap_or(""),
            self.line.map(|line| line.to_string()).unwrap_or_default(),
            self.class.as_deref().unwrap_or(""),
            self.function
        )
    }
}

/// Call-stack introspection.
pub trait StackProbe: Send + Sync {
    /// Frames of the caller's stack, innermost first, with the probe's own
    /// frames and the first `skip` caller frames left out.
    fn frames(&self, skip: usize) -> Vec<Frame>;
}

/// Probe backed by `std::backtrace`.
///
/// Leading frames that belong to the backtrace machinery or to this crate are
/// dropped, so frame zero is the code that called into the logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceProbe;

impl StackProbe for BacktraceProbe {
    fn frames(&self, skip: usize) -> Vec<Frame> {
        let text = Backtrace::force_capture().to_string();
        parse_backtrace(&text)
            .into_iter()
            .skip_while(|frame| is_internal(frame))
            .skip(skip)
            .collect()
    }
}

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

fn is_internal(frame: &Frame) -> bool {
    let path = match &frame.class {
        Some(class) => format!("{}::{}", class, frame.function),
        None => frame.function.clone(),
    };
    let path = path.trim_start_matches('<');
    path.starts_with("std::backtrace")
        || path.starts_with("backtrace::")
        || path.starts_with(CRATE_PREFIX)
}

/// Parse the textual form of a captured [`Backtrace`].
///
/// Frames look like `  3: crate::module::Type::method` followed by an
/// optional `at path/to/file.rs:12:5` line.
pub fn parse_backtrace(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                if frame.file.is_none() {
                    if let Some((file, line_no)) = split_location(location) {
                        frame.file = Some(file.to_string());
                        frame.line = Some(line_no);
                    }
                }
            }
            continue;
        }

        let Some((index, symbol)) = line.split_once(": ") else {
            continue;
        };
        if index.is_empty() || !index.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }

        let symbol = strip_hash(symbol.trim());
        let (class, function) = split_symbol(symbol);
        frames.push(Frame {
            file: None,
            line: None,
            class: class.map(str::to_string),
            function: function.to_string(),
            args: Vec::new(),
        });
    }

    frames
}

/// `path/file.rs:12:5` -> (`path/file.rs`, 12)
fn split_location(location: &str) -> Option<(&str, u32)> {
    let (rest, last) = location.rsplit_once(':')?;
    match rest.rsplit_once(':') {
        Some((file, line)) if line.chars().all(|c| c.is_ascii_digit()) => {
            Some((file, line.parse().ok()?))
        }
        _ => Some((rest, last.parse().ok()?)),
    }
}

/// Drop the `::h0123456789abcdef` disambiguator some symbols carry.
fn strip_hash(symbol: &str) -> &str {
    match symbol.rsplit_once("::h") {
        Some((head, hash)) if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) => {
            head
        }
        _ => symbol,
    }
}

/// Split `a::b::Type::method` into (`a::b::Type`, `method`), ignoring `::`
/// inside generic brackets and before a turbofish. The `>` of `->` does not
/// close a bracket.
fn split_symbol(symbol: &str) -> (Option<&str>, &str) {
    let bytes = symbol.as_bytes();
    let mut depth = 0i32;
    let mut split = None;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth -= 1,
            b':' if depth == 0
                && bytes.get(i + 1) == Some(&b':')
                && bytes.get(i + 2) != Some(&b'<') =>
            {
                split = Some(i)
            }
            _ => {}
        }
    }

    match split {
        Some(i) if i > 0 => (Some(&symbol[..i]), &symbol[i + 2..]),
        _ => (None, symbol),
    }
}
