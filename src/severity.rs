//! Severity levels and their line tags.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Ordered log importance: `Debug < Info < Warn < Error`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Debugging information
    Debug,
    /// General information
    #[default]
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Fixed-width tag written between the logger name and the timestamp.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Debug => " DEBUG: ",
            Severity::Info => " INFO : ",
            Severity::Warn => " WARN : ",
            Severity::Error => " ERROR: ",
        }
    }

    /// Lowercase name, as accepted by `FromStr` and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// The most verbose `log` filter that still lets this severity through.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Severity::Debug => log::LevelFilter::Trace,
            Severity::Info => log::LevelFilter::Info,
            Severity::Warn => log::LevelFilter::Warn,
            Severity::Error => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

// Trace has no tag of its own and is folded into Debug.
impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}
