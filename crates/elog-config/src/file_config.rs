use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BUFFER_SIZE_BYTES, DEFAULT_FLUSH_INTERVAL_SECS,
    DEFAULT_LOG_DIRECTORY, DEFAULT_MAX_BACKUP_COUNT, DEFAULT_MAX_FILE_SIZE_BYTES,
    MAX_BUFFER_SIZE_BYTES, MAX_FLUSH_INTERVAL_SECS, MAX_MAX_BACKUP_COUNT, MIN_BUFFER_SIZE_BYTES,
    MIN_FLUSH_INTERVAL_SECS, MIN_MAX_BACKUP_COUNT, MIN_MAX_FILE_SIZE_BYTES,
};

use std::time::Duration;

use serde::Deserialize;

/// Rotating file sink settings.
/// All values validated to be within reasonable operational ranges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Directory the log files are written to
    pub dir: String,
    /// Size rollover threshold for the live file
    pub max_file_size_bytes: u64,
    /// Files kept per day, live file included
    pub max_backup_count: usize,
    /// Buffered writer capacity
    pub buffer_size_bytes: usize,
    /// Background flush cadence in seconds
    pub flush_interval_secs: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            max_backup_count: DEFAULT_MAX_BACKUP_COUNT,
            buffer_size_bytes: DEFAULT_BUFFER_SIZE_BYTES,
            flush_interval_secs: DEFAULT_FLUSH_INTERVAL_SECS,
        }
    }
}

impl FileConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::file("file.dir must not be empty"));
        }

        if self.max_file_size_bytes < MIN_MAX_FILE_SIZE_BYTES {
            return Err(ConfigError::file(format!(
                "file.max_file_size_bytes must be >= {}, got {}",
                MIN_MAX_FILE_SIZE_BYTES, self.max_file_size_bytes
            )));
        }

        if self.max_backup_count < MIN_MAX_BACKUP_COUNT
            || self.max_backup_count > MAX_MAX_BACKUP_COUNT
        {
            return Err(ConfigError::file(format!(
                "file.max_backup_count must be {}-{}, got {}",
                MIN_MAX_BACKUP_COUNT, MAX_MAX_BACKUP_COUNT, self.max_backup_count
            )));
        }

        if self.buffer_size_bytes < MIN_BUFFER_SIZE_BYTES
            || self.buffer_size_bytes > MAX_BUFFER_SIZE_BYTES
        {
            return Err(ConfigError::file(format!(
                "file.buffer_size_bytes must be {}-{}, got {}",
                MIN_BUFFER_SIZE_BYTES, MAX_BUFFER_SIZE_BYTES, self.buffer_size_bytes
            )));
        }

        if self.flush_interval_secs < MIN_FLUSH_INTERVAL_SECS
            || self.flush_interval_secs > MAX_FLUSH_INTERVAL_SECS
        {
            return Err(ConfigError::file(format!(
                "file.flush_interval_secs must be {}-{}, got {}",
                MIN_FLUSH_INTERVAL_SECS, MAX_FLUSH_INTERVAL_SECS, self.flush_interval_secs
            )));
        }

        Ok(())
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_secs)
    }
}
