use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROGRAM_NAME, LogLevel};

use std::path::Path;

use serde::Deserialize;

/// Front-end settings: level filter, stderr mirror and the program name used
/// in log file names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Mirror every written line to standard error
    pub to_stderr: bool,
    /// Color the level tag on the stderr mirror
    pub colored: bool,
    /// Defaults to the executable name
    pub program: Option<String>,
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref program) = self.program {
            if program.trim().is_empty() {
                return Err(ConfigError::logging("logging.program must not be empty"));
            }
            if program.contains('/') || program.contains('\\') {
                return Err(ConfigError::logging(format!(
                    "logging.program must not contain path separators, got {program}"
                )));
            }
        }

        Ok(())
    }

    /// Configured program name, or the executable's file stem.
    pub fn program_name(&self) -> String {
        self.program.clone().unwrap_or_else(default_program_name)
    }
}

/// File stem of the running executable, falling back to the first process
/// argument and then to a fixed name.
pub fn default_program_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| stem(&exe))
        .or_else(|| std::env::args_os().next().and_then(|arg| stem(Path::new(&arg))))
        .unwrap_or_else(|| String::from(DEFAULT_PROGRAM_NAME))
}

fn stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}
