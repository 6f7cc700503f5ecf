use crate::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to open log file {path}: {source} {location}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to rename {from} to {to}: {source} {location}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to remove {path}: {source} {location}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write to {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to flush {path}: {source} {location}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Sink error: {message} {location}")]
    Other {
        message: String,
        location: ErrorLocation,
    },
}

impl SinkError {
    #[track_caller]
    pub fn open(path: &Path, source: std::io::Error) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rename(from: &Path, to: &Path, source: std::io::Error) -> Self {
        Self::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remove(path: &Path, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn flush(path: &Path, source: std::io::Error) -> Self {
        Self::Flush {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error for sinks that are not backed by the filesystem.
    #[track_caller]
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True for failures of the backup chain shift.
    pub fn is_rotation(&self) -> bool {
        matches!(self, Self::Rename { .. } | Self::Remove { .. })
    }
}

pub type Result<T> = StdResult<T, SinkError>;
