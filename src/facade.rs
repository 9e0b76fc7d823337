//! Bridge from the `log` crate macros to a [`LevelLogger`].
//!
//! After [`LevelLogger::install`], `log::info!("..")` and friends are
//! written through the installed logger with its name and level tags.
//! `trace!` records are written with the debug tag.

use log::{Log, Metadata, Record};

use crate::{LevelLogger, Result, Severity};

impl Log for LevelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        LevelLogger::enabled(self, Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        self.emit(Severity::from(record.level()), *record.args());
    }

    fn flush(&self) {
        LevelLogger::flush(self);
    }
}

impl LevelLogger {
    /// Install this logger as the global `log` backend.
    ///
    /// The global max level is set from the minimum severity. Fails with
    /// [`Error::AlreadyInstalled`](crate::Error::AlreadyInstalled) if a
    /// logger is already set.
    pub fn install(self) -> Result<()> {
        let filter = self.minimum().to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}
