//! Logging collaborator
//!
//! The library never installs a global logger. Components that log carry a
//! [`Logger`] value that holds their own level filter and forwards records
//! to the `log` facade. The binary installs a `simplelog` terminal sink once
//! with [`init_terminal`].

use log::{Level, LevelFilter};
use std::fmt;

const LOG_TARGET: &str = "zshcfg";

/// Explicit logging handle passed to the config model and persistence code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// A logger that drops every record.
    pub fn disabled() -> Self {
        Self::new(LevelFilter::Off)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            log::log!(target: LOG_TARGET, level, "{}", args);
        }
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LevelFilter::Info)
    }
}

/// Install a stderr terminal logger for the binary.
///
/// Calling it twice is harmless; the second call reports the existing logger.
pub fn init_terminal(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}
