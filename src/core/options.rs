//! Logger configuration
//!
//! Built once at startup and shared read-only. The serde names match the
//! option names a tool passes on its command line or in a config file, e.g.
//! `log-print-level`.

use super::arg::Abbreviation;
use super::error::{LoggerError, Result};
use super::severity::Severity;
use super::timestamp::DateFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "/var/log/egg.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Options {
    /// Threshold for the live console
    pub log_print_level: Severity,
    /// Threshold for the log file
    pub log_file_level: Severity,
    /// Threshold for the in-memory buffer
    pub log_memory_level: Severity,
    /// Events at or above this severity dump a trace and halt
    pub log_break_level: Severity,
    /// Whether [`mark`](super::logger::Logger::mark) logs anything
    pub log_mark_trace: bool,
    pub log_file: Option<PathBuf>,
    /// `H:i:s` style or strftime pattern, see [`DateFormat`]
    pub log_date_format: String,
    pub log_section_open: Vec<String>,
    pub log_section_close: Vec<String>,
    pub log_trail_level: String,
    /// Prefix stripped from file names in traces
    pub app_root: String,
    pub log_aliases: BTreeMap<String, String>,
    pub log_abbr_width: usize,
    pub log_abbr_suffix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log_print_level: Severity::Info,
            log_file_level: Severity::Debug,
            log_memory_level: Severity::Debug,
            log_break_level: Severity::Err,
            log_mark_trace: false,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            log_date_format: "H:i:s".to_string(),
            log_section_open: vec!["section_open".to_string()],
            log_section_close: vec!["section_close".to_string()],
            log_trail_level: "trail".to_string(),
            app_root: String::new(),
            log_aliases: BTreeMap::from([("error".to_string(), "err".to_string())]),
            log_abbr_width: 30,
            log_abbr_suffix: "...".to_string(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from JSON; missing keys keep their defaults.
    ///
    /// ```
    /// use eggshell::{Options, Severity};
    ///
    /// let options = Options::from_json(r#"{"log-print-level": "debug", "log-file": null}"#).unwrap();
    /// assert_eq!(options.log_print_level, Severity::Debug);
    /// assert_eq!(options.log_file, None);
    /// assert_eq!(options.log_break_level, Severity::Err);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        DateFormat::new(&self.log_date_format)?;

        if self.log_trail_level.is_empty() {
            return Err(LoggerError::config("log-trail-level", "tag must not be empty"));
        }

        if self.log_abbr_width <= self.log_abbr_suffix.chars().count() {
            return Err(LoggerError::config(
                "log-abbr-width",
                format!(
                    "width {} leaves no room next to suffix '{}'",
                    self.log_abbr_width, self.log_abbr_suffix
                ),
            ));
        }

        Ok(())
    }

    /// The configured log file, treating an empty path as unset.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub fn abbreviation(&self) -> Abbreviation {
        Abbreviation::new(self.log_abbr_width, self.log_abbr_suffix.clone())
    }

    /// Resolve `tag` through the alias table.
    pub fn resolve_alias<'a>(&'a self, tag: &'a str) -> &'a str {
        self.log_aliases.get(tag).map(String::as_str).unwrap_or(tag)
    }

    /// Strip the application root from `file`.
    pub fn in_path<'a>(&self, file: &'a str) -> &'a str {
        if self.app_root.is_empty() {
            return file;
        }
        file.strip_prefix(self.app_root.as_str()).unwrap_or(file)
    }

    #[must_use = "option setters return a new value"]
    pub fn print_level(mut self, level: Severity) -> Self {
        self.log_print_level = level;
        self
    }

    #[must_use = "option setters return a new value"]
    pub fn file_level(mut self, level: Severity) -> Self {
        self.log_file_level = level;
        self
    }

    #[must_use = "option setters return a new value"]
    pub fn memory_level(mut self, level: Severity) -> Self {
        self.log_memory_level = level;
        self
    }

    #[must_use = "option setters return a new value"]
    pub fn break_level(mut self, level: Severity) -> Self {
        self.log_break_level = level;
        self
    }

    #[must_use = "option setters return a new value"]
    pub fn mark_trace(mut self, enabled: bool) -> Self {
        self.log_mark_trace = enabled;
        self
    }

    #[must_use = "option setters return a new value"]
    pub fn file(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.log_file = path.map(Into::into);
        self
    }

    #[must_use = "option setters return a new value"]
    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        self.log_date_format = pattern.into();
        self
    }

    #[must_use = "option setters return a new value"]
    pub fn app_root(mut self, root: impl Into<String>) -> Self {
        self.app_root = root.into();
        self
    }
}
