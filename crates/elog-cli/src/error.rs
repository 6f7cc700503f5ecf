use elog::LogError;
use elog_config::ConfigError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Log {
        #[source]
        source: LogError,
        location: ErrorLocation,
    },

    #[error("Failed to read standard input: {source} {location}")]
    Stdin {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn stdin(source: std::io::Error) -> Self {
        Self::Stdin {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<LogError> for CliError {
    #[track_caller]
    fn from(source: LogError) -> Self {
        Self::Log {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
