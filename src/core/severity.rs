//! Severity ladder
//!
//! A fixed, totally ordered set of urgencies. Lower weight means more urgent,
//! and an event passes a threshold when its weight is not above the threshold's.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Err = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
    Debugv = 8,
}

impl Severity {
    /// Every rung, most urgent first.
    pub const ALL: [Severity; 9] = [
        Severity::Emerg,
        Severity::Alert,
        Severity::Crit,
        Severity::Err,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
        Severity::Debugv,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Emerg => "emerg",
            Severity::Alert => "alert",
            Severity::Crit => "crit",
            Severity::Err => "err",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Debugv => "debugv",
        }
    }

    #[inline]
    pub fn weight(&self) -> u8 {
        *self as u8
    }

    /// Whether an event of this severity clears `threshold`.
    ///
    /// ```
    /// use eggshell::Severity;
    ///
    /// assert!(Severity::Warning.passes(Severity::Info));
    /// assert!(Severity::Info.passes(Severity::Info));
    /// assert!(!Severity::Debug.passes(Severity::Info));
    /// ```
    #[inline]
    pub fn passes(&self, threshold: Severity) -> bool {
        self.weight() <= threshold.weight()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Emerg | Severity::Alert => BrightRed,
            Severity::Crit | Severity::Err => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Info => Green,
            Severity::Debug => Blue,
            Severity::Debugv => BrightBlack,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Parses ladder tags only. Aliases such as `error` are resolved by the
    /// dispatcher's configuration, not here.
    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        Severity::ALL
            .iter()
            .copied()
            .find(|severity| severity.to_str() == s)
            .ok_or_else(|| format!("Invalid severity: '{}'", s))
    }
}
