//! Minimal stderr logger for the command-line tool

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing `level: message` lines to stderr
#[derive(Debug, Clone, Copy)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Create a logger that passes records at or above `level`
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Level filter for the verbosity flags: `-q` silences everything but
    /// errors, each `-v` steps from warnings through info and debug to trace
    pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::Error;
        }
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Active level filter
    pub const fn level(&self) -> LevelFilter {
        self.level
    }

    /// Install as the global logger
    ///
    /// # Errors
    ///
    /// Returns [`SetLoggerError`] if a logger is already installed
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.level);
        Ok(())
    }

    /// Line written for one record
    pub fn format_record(record: &Record<'_>) -> String {
        let label = match record.level() {
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        format!("{label}: {}", record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    // Allow print for log output
    #[allow(clippy::print_stderr)]
    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format_record(record));
        }
    }

    fn flush(&self) {}
}
