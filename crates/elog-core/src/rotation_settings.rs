use crate::{DEFAULT_BUFFER_SIZE_BYTES, DEFAULT_MAX_BACKUP_COUNT, DEFAULT_MAX_FILE_SIZE_BYTES};

/// Thresholds consumed by [`crate::RotatingFileSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSettings {
    /// Size rollover happens once the live file has taken more than this.
    pub max_file_size_bytes: u64,
    /// Depth of the backup chain, live file included.
    pub max_backup_count: usize,
    /// Capacity of the buffered writer over the live file.
    pub buffer_size_bytes: usize,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            max_backup_count: DEFAULT_MAX_BACKUP_COUNT,
            buffer_size_bytes: DEFAULT_BUFFER_SIZE_BYTES,
        }
    }
}
