mod config;
mod error;
mod file_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use file_config::FileConfig;
pub use log_level::LogLevel;
pub use logging_config::{LoggingConfig, default_program_name};

const DEFAULT_CONFIG_FILENAME: &str = "elog.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "./";
const DEFAULT_PROGRAM_NAME: &str = "elog";

// File sink thresholds; defaults are the sink's own
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = elog_core::DEFAULT_MAX_FILE_SIZE_BYTES;
pub const MIN_MAX_FILE_SIZE_BYTES: u64 = 1;

pub const DEFAULT_MAX_BACKUP_COUNT: usize = elog_core::DEFAULT_MAX_BACKUP_COUNT;
pub const MIN_MAX_BACKUP_COUNT: usize = 1;
pub const MAX_MAX_BACKUP_COUNT: usize = 1000;

pub const DEFAULT_BUFFER_SIZE_BYTES: usize = elog_core::DEFAULT_BUFFER_SIZE_BYTES;
pub const MIN_BUFFER_SIZE_BYTES: usize = 1;
pub const MAX_BUFFER_SIZE_BYTES: usize = 64 * 1024 * 1024;

pub const DEFAULT_FLUSH_INTERVAL_SECS: u64 = 3;
pub const MIN_FLUSH_INTERVAL_SECS: u64 = 1;
pub const MAX_FLUSH_INTERVAL_SECS: u64 = 3600;
