use elog_config::ConfigError;
use elog_core::SinkError;

use error_location::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Sink error: {source} {location}")]
    Sink {
        #[source]
        source: SinkError,
        location: ErrorLocation,
    },

    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("IO error for {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger not initialized {location}")]
    NotInitialized { location: ErrorLocation },

    #[error("Logger already initialized {location}")]
    AlreadyInitialized { location: ErrorLocation },

    #[error("Failed to register with the log facade: {message} {location}")]
    Facade {
        message: String,
        location: ErrorLocation,
    },

    #[error("Flush daemon failed: {message} {location}")]
    Daemon {
        message: String,
        location: ErrorLocation,
    },
}

impl LogError {
    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_initialized() -> Self {
        Self::NotInitialized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_initialized() -> Self {
        Self::AlreadyInitialized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn facade<S: Into<String>>(message: S) -> Self {
        Self::Facade {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn daemon<S: Into<String>>(message: S) -> Self {
        Self::Daemon {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SinkError> for LogError {
    #[track_caller]
    fn from(source: SinkError) -> Self {
        Self::Sink {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for LogError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
