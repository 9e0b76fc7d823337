//! File or stdout backed leveled logger.

use std::fmt::Arguments;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::config::LoggerConfig;
use crate::logger::Logger;
use crate::{line, Error, Result, Severity};

/// Permission bits for a newly created log file, before the umask.
pub const FILE_MODE: u32 = 0o666;

/// Exit status passed to the terminate hook by [`Logger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Process termination hook used by [`Logger::fatal`].
pub type Terminate = fn(i32) -> !;

/// Logger that writes name-prefixed, timestamped lines to one destination.
///
/// The minimum severity, the name, and the destination are fixed at
/// construction. The destination is never closed; it is released when the
/// logger is dropped or the process exits.
pub struct LevelLogger {
    minimum: Severity,
    name: String,
    destination: Mutex<Box<dyn Write + Send>>,
    terminate: Terminate,
}

impl LevelLogger {
    /// Create a logger writing to `file_path`, or to standard output when the
    /// path is empty.
    ///
    /// The file is opened for appending and created if missing.
    pub fn new(
        minimum: Severity,
        name: impl Into<String>,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let file_path = file_path.as_ref();
        let destination: Box<dyn Write + Send> = if file_path.as_os_str().is_empty() {
            Box::new(io::stdout())
        } else {
            Box::new(open_append(file_path).map_err(Error::Open)?)
        };

        Ok(Self::from_boxed(minimum, name.into(), destination))
    }

    /// Create a logger writing to an arbitrary sink.
    pub fn with_writer(
        minimum: Severity,
        name: impl Into<String>,
        writer: impl Write + Send + 'static,
    ) -> Self {
        Self::from_boxed(minimum, name.into(), Box::new(writer))
    }

    /// Create a logger from loaded configuration.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let path = config.file.as_deref().unwrap_or_else(|| Path::new(""));
        Self::new(config.level, config.name.clone(), path)
    }

    /// Replace the hook [`Logger::fatal`] calls after writing its message.
    ///
    /// Defaults to [`std::process::exit`].
    pub fn with_terminate(mut self, terminate: Terminate) -> Self {
        self.terminate = terminate;
        self
    }

    fn from_boxed(minimum: Severity, name: String, destination: Box<dyn Write + Send>) -> Self {
        Self {
            minimum,
            name,
            destination: Mutex::new(destination),
            terminate: std::process::exit,
        }
    }

    /// Configured minimum severity.
    pub fn minimum(&self) -> Severity {
        self.minimum
    }

    /// Name written at the start of every line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a message at `severity` passes the gate.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.minimum <= severity
    }

    /// Write one line at `severity` if it passes the gate.
    ///
    /// The line is rendered before the lock is taken and written with a
    /// single call, so concurrent lines never interleave. Write errors are
    /// dropped.
    pub fn emit(&self, severity: Severity, args: Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let line = line::render(&self.name, severity, args);
        let mut destination = self
            .destination
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let _ = destination.write_all(line.as_bytes());
        let _ = destination.flush();
    }

    pub(crate) fn flush(&self) {
        let mut destination = self
            .destination
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let _ = destination.flush();
    }
}

impl Logger for LevelLogger {
    fn debug(&self, args: Arguments<'_>) {
        self.emit(Severity::Debug, args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.emit(Severity::Info, args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.emit(Severity::Warn, args);
    }

    fn error(&self, args: Arguments<'_>) {
        self.emit(Severity::Error, args);
    }

    // Goes to stderr only; the configured destination is not written.
    fn fatal(&self, args: Arguments<'_>) -> ! {
        let _ = writeln!(io::stderr().lock(), "{}", args);
        (self.terminate)(FATAL_EXIT_CODE)
    }
}

impl std::fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelLogger")
            .field("minimum", &self.minimum)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(unix)]
fn open_append(path: &Path) -> io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> io::Result<std::fs::File> {
    OpenOptions::new().create(true).append(true).open(path)
}
