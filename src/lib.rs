//! Leveled line logger with named prefixes.
//!
//! A [`LevelLogger`] writes timestamped lines to standard output or to a file
//! opened for append. Every line carries the logger's name and a fixed-width
//! level tag, and anything below the configured minimum [`Severity`] is
//! dropped. Callers should depend on the [`Logger`] trait so a
//! [`CaptureLogger`] or [`NoOpLogger`] can stand in during tests.

use std::error::Error as StdError;
use std::fmt;

pub mod capture;
pub mod config;
pub mod facade;
pub mod level_logger;
pub mod line;
pub mod logger;
pub mod severity;

// Re-export key types
pub use capture::{CaptureLogger, NoOpLogger};
pub use config::LoggerConfig;
pub use level_logger::{LevelLogger, Terminate};
pub use logger::{Logger, Spaced};
pub use severity::Severity;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    /// The log file could not be opened or created
    Open(std::io::Error),
    /// Input/output error outside of opening the log file
    Io(std::io::Error),
    /// Configuration could not be parsed
    Config(serde_json::Error),
    /// Unrecognized severity name
    InvalidSeverity(String),
    /// A global `log` logger has already been set
    AlreadyInstalled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open(err) => write!(f, "Failed to open log file: {}", err),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Config(err) => write!(f, "Invalid logger configuration: {}", err),
            Error::InvalidSeverity(name) => write!(f, "Unknown severity: {}", name),
            Error::AlreadyInstalled => write!(f, "A global logger is already installed"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Open(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::InvalidSeverity(_) => None,
            Error::AlreadyInstalled => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(_: log::SetLoggerError) -> Self {
        Error::AlreadyInstalled
    }
}

/// Type alias for library results
pub type Result<T> = std::result::Result<T, Error>;
