//! The `Logger` capability and its convenience macros.
//!
//! Components take an `Arc<dyn Logger>` (or `&dyn Logger`) instead of a
//! concrete [`LevelLogger`](crate::LevelLogger), so tests can hand them a
//! [`CaptureLogger`](crate::CaptureLogger).
//!
//! ```
//! use leveled_logger::{CaptureLogger, Logger, Severity};
//! use leveled_logger::{log_info, log_error};
//! use std::sync::Arc;
//!
//! let capture = Arc::new(CaptureLogger::new(Severity::Info));
//! let logger: Arc<dyn Logger> = capture.clone();
//! log_info!(logger; "listening on", 8080);
//! log_error!(logger, "request {} failed", 17);
//! assert_eq!(capture.messages(), vec!["listening on 8080", "request 17 failed"]);
//! ```

use std::fmt::{self, Arguments};

/// Leveled and fatal logging.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// between threads.
pub trait Logger: Send + Sync {
    /// Log a debug-level message.
    fn debug(&self, args: Arguments<'_>);

    /// Log an info-level message.
    fn info(&self, args: Arguments<'_>);

    /// Log a warning-level message.
    fn warn(&self, args: Arguments<'_>);

    /// Log an error-level message.
    fn error(&self, args: Arguments<'_>);

    /// Report an unrecoverable condition and terminate.
    ///
    /// Ignores the minimum severity. Never returns.
    fn fatal(&self, args: Arguments<'_>) -> !;
}

/// Displays values separated by single spaces, the way a println-style
/// formatter joins its operands.
pub struct Spaced<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Log at debug level.
///
/// `log_debug!(logger; a, b)` joins the values with spaces;
/// `log_debug!(logger, "fmt {}", a)` formats them.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.debug(format_args!("{}", $crate::Spaced(&[$(&$value as &dyn ::std::fmt::Display),+])))
    };
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

/// Log at info level. Accepts the same forms as [`log_debug!`].
#[macro_export]
macro_rules! log_info {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.info(format_args!("{}", $crate::Spaced(&[$(&$value as &dyn ::std::fmt::Display),+])))
    };
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

/// Log at warn level. Accepts the same forms as [`log_debug!`].
#[macro_export]
macro_rules! log_warn {
    ($logger:expr; $($value:expr),+ $(,)?) => {
        $logger.warn(format_args!("{}", $crate::Spaced(&[$(&$value as &dyn ::std::fmt::Display),+])))
    };
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

/// Log a formatted message to standard error and terminate.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(format_args!($($arg)*))
    };
}
