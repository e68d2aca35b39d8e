//! Display shaping of dispatched lines
//!
//! Every tag is classified into a [`LineKind`], which fixes the severity used
//! for thresholds and how the line is framed. The rendered line is
//! `<prefix><label right-aligned to 8> <timestamp><indent><message>`.

use super::error::{LoggerError, Result};
use super::options::Options;
use super::severity::Severity;
use super::timestamp::BLANK_TIMESTAMP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    SectionOpen,
    SectionClose,
    Trail,
    Stderr,
    Stdout,
    Plain(Severity),
}

impl LineKind {
    /// Classify an alias-resolved tag. Configured markers win over the
    /// built-in pseudo-levels, which win over ladder tags.
    pub fn classify(tag: &str, options: &Options) -> Result<Self> {
        if options.log_section_open.iter().any(|t| t == tag) {
            return Ok(LineKind::SectionOpen);
        }
        if options.log_section_close.iter().any(|t| t == tag) {
            return Ok(LineKind::SectionClose);
        }
        if options.log_trail_level == tag {
            return Ok(LineKind::Trail);
        }
        match tag {
            "stderr" => Ok(LineKind::Stderr),
            "stdout" => Ok(LineKind::Stdout),
            other => other
                .parse::<Severity>()
                .map(LineKind::Plain)
                .map_err(|_| LoggerError::unknown_level(other)),
        }
    }

    /// Severity used for threshold checks and backend routing.
    pub fn effective(&self) -> Severity {
        match self {
            LineKind::SectionOpen | LineKind::SectionClose | LineKind::Trail => Severity::Notice,
            LineKind::Stderr => Severity::Warning,
            LineKind::Stdout => Severity::Debug,
            LineKind::Plain(severity) => *severity,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            LineKind::SectionOpen => Shape {
                show_label: false,
                show_timestamp: false,
                indent: " ",
                prefix: "\n",
            },
            LineKind::SectionClose => Shape {
                show_label: false,
                show_timestamp: false,
                indent: " ",
                prefix: "",
            },
            LineKind::Stderr | LineKind::Stdout => Shape {
                show_label: false,
                show_timestamp: false,
                indent: "        ",
                prefix: "",
            },
            LineKind::Trail | LineKind::Plain(_) => Shape {
                show_label: true,
                show_timestamp: true,
                indent: "    ",
                prefix: "",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub show_label: bool,
    pub show_timestamp: bool,
    pub indent: &'static str,
    pub prefix: &'static str,
}

impl Shape {
    /// Render the final line; `label` is the resolved tag, `timestamp` the
    /// formatted date.
    pub fn render(&self, label: &str, timestamp: &str, message: &str) -> String {
        let label = if self.show_label { label } else { "" };
        let timestamp = if self.show_timestamp {
            timestamp
        } else {
            BLANK_TIMESTAMP
        };
        format!(
            "{}{:>8} {}{}{}",
            self.prefix, label, timestamp, self.indent, message
        )
    }
}
