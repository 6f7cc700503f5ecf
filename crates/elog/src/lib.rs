//! Leveled logging over a pluggable [`LogSink`].
//!
//! A [`Logger`] filters records by level, renders them as
//! `[LEVEL][YYYY-MM-DD HH:MM:SS][file:<name> line:<n>] message` and hands
//! each line to its sink under one lock. It implements [`log::Log`], so the
//! usual `log::info!` macros are the call-site API once a logger is
//! installed through [`global::init`].
//!
//! ```no_run
//! # async fn run() -> elog::Result<()> {
//! let config = elog::Config::load()?;
//! let logger = elog::global::init(&config)?;
//! let daemon = elog::FlushDaemon::spawn(logger, config.file.flush_interval());
//!
//! log::info!("service started");
//!
//! daemon.stop().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod flush_daemon;
pub mod global;
pub mod header;
pub mod logger;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod stderr_mirror;

#[cfg(test)]
mod tests;

pub use error::{LogError, Result};
pub use flush_daemon::FlushDaemon;
pub use header::CallSite;
pub use logger::Logger;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use stderr_mirror::StderrMirror;

pub use elog_config::{Config, LogLevel};
pub use elog_core::{
    BackupChain, Clock, LocalClock, LogSink, ManualClock, MemorySink, RotatingFileSink,
    RotationSettings, SinkError,
};

/// Timestamp format of the line header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Printed to standard error when the global logger is used before `init`.
pub const NOT_INITIALIZED_MESSAGE: &str = "ERROR: logging before elog::init";
