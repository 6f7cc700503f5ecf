//! Process-wide default logger.
//!
//! [`init`] must run once, after configuration is final and before anything
//! logs. Until then the functions here print
//! [`NOT_INITIALIZED_MESSAGE`](crate::NOT_INITIALIZED_MESSAGE) to standard
//! error and do nothing else, and the `log` macros are silently discarded.
//! Independent loggers can still be built with [`Logger::new`] without
//! touching this state.

use crate::{Config, LogError, Logger, NOT_INITIALIZED_MESSAGE, Result};

use std::fmt;
use std::sync::{Arc, OnceLock};

use log::{Level, Metadata, Record, info};

static GLOBAL: OnceLock<Arc<Logger>> = OnceLock::new();

/// Validate `config`, build a file logger from it and install it.
pub fn init(config: &Config) -> Result<Arc<Logger>> {
    config.validate()?;
    let logger = install(Logger::from_config(config)?)?;

    info!(
        "Logger initialized: level={}, dir={}, program={}",
        config.logging.level,
        config.file.dir,
        config.logging.program_name()
    );

    Ok(logger)
}

/// Install `logger` as the process-wide default and register it with the
/// `log` facade. Fails if a default logger is already installed, or if
/// another `log` backend was registered first; nothing is installed then.
pub fn install(logger: Logger) -> Result<Arc<Logger>> {
    if GLOBAL.get().is_some() {
        return Err(LogError::already_initialized());
    }

    let level = logger.level();
    let logger = Arc::new(logger);
    log::set_boxed_logger(Box::new(Facade(Arc::clone(&logger))))
        .map_err(|e| LogError::facade(e.to_string()))?;
    log::set_max_level(level);

    // The facade accepts one backend per process, so this slot is free.
    GLOBAL
        .set(Arc::clone(&logger))
        .map_err(|_| LogError::already_initialized())?;

    Ok(logger)
}

pub fn logger() -> Option<Arc<Logger>> {
    GLOBAL.get().cloned()
}

pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

/// Flush the default logger.
pub fn flush() -> Result<()> {
    installed()?.flush()
}

/// Log through the default logger with the caller's location.
#[track_caller]
pub fn log_at(level: Level, args: fmt::Arguments<'_>) -> Result<()> {
    installed()?.log_at(level, args)
}

fn installed() -> Result<&'static Logger> {
    match GLOBAL.get() {
        Some(logger) => Ok(logger),
        None => {
            eprintln!("{NOT_INITIALIZED_MESSAGE}");
            Err(LogError::not_initialized())
        }
    }
}

struct Facade(Arc<Logger>);

impl log::Log for Facade {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        log::Log::enabled(&*self.0, metadata)
    }

    fn log(&self, record: &Record<'_>) {
        log::Log::log(&*self.0, record)
    }

    fn flush(&self) {
        log::Log::flush(&*self.0)
    }
}
