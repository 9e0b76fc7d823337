//! In-memory and silent `Logger` implementations for tests.

use std::fmt::Arguments;
use std::sync::{Mutex, PoisonError};

use crate::level_logger::FATAL_EXIT_CODE;
use crate::logger::Logger;
use crate::Severity;

/// A logger that records messages instead of writing them.
///
/// Applies the same minimum-severity gate as [`LevelLogger`](crate::LevelLogger).
/// [`Logger::fatal`] records the message and then panics, so a test can
/// observe it with `#[should_panic]` or `catch_unwind`. This departs from the
/// log-and-halt contract on purpose: the process keeps running. Loggers
/// used outside tests must terminate in `fatal`, as
/// [`LevelLogger`](crate::LevelLogger) does.
#[derive(Debug, Default)]
pub struct CaptureLogger {
    minimum: Severity,
    records: Mutex<Vec<(Severity, String)>>,
    fatal: Mutex<Option<String>>,
}

impl CaptureLogger {
    /// Create a capture logger with the given minimum severity.
    pub fn new(minimum: Severity) -> Self {
        Self {
            minimum,
            ..Self::default()
        }
    }

    fn record(&self, severity: Severity, args: Arguments<'_>) {
        if self.minimum <= severity {
            self.records
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((severity, args.to_string()));
        }
    }

    /// Every recorded message with its severity, oldest first.
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded message bodies, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|(_, msg)| msg).collect()
    }

    /// Message passed to the last `fatal` call, if any.
    pub fn fatal_message(&self) -> Option<String> {
        self.fatal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Logger for CaptureLogger {
    fn debug(&self, args: Arguments<'_>) {
        self.record(Severity::Debug, args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.record(Severity::Info, args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.record(Severity::Warn, args);
    }

    fn error(&self, args: Arguments<'_>) {
        self.record(Severity::Error, args);
    }

    fn fatal(&self, args: Arguments<'_>) -> ! {
        let message = args.to_string();
        *self.fatal.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.clone());
        panic!("fatal (exit {}): {}", FATAL_EXIT_CODE, message)
    }
}

/// A logger that discards all messages.
///
/// `fatal` still terminates the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn debug(&self, _args: Arguments<'_>) {}

    #[inline]
    fn info(&self, _args: Arguments<'_>) {}

    #[inline]
    fn warn(&self, _args: Arguments<'_>) {}

    #[inline]
    fn error(&self, _args: Arguments<'_>) {}

    fn fatal(&self, _args: Arguments<'_>) -> ! {
        std::process::exit(FATAL_EXIT_CODE)
    }
}
