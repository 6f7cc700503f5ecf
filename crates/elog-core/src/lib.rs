//! Sink layer for elog: the `LogSink` contract and the rotating file sink.
//!
//! The file sink keeps one open file per calendar day, named
//! `<program>-<YYYY-MM-DD>.log`, and shifts it into a numbered backup chain
//! (`.log.1`, `.log.2`, ...) once it grows past the configured size.

mod backup_chain;
mod clock;
mod error;
mod log_sink;
mod memory_sink;
mod rotating_file_sink;
mod rotation_settings;

#[cfg(test)]
mod tests;

pub use backup_chain::BackupChain;
pub use clock::{Clock, LocalClock, ManualClock};
pub use error::{Result, SinkError};
pub use log_sink::LogSink;
pub use memory_sink::MemorySink;
pub use rotating_file_sink::RotatingFileSink;
pub use rotation_settings::RotationSettings;

pub use error_location::ErrorLocation;

pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024 * 1024;
pub const DEFAULT_MAX_BACKUP_COUNT: usize = 10;
pub const DEFAULT_BUFFER_SIZE_BYTES: usize = 1024 * 1024;

/// Date format used in log file names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
