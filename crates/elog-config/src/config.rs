use crate::{ConfigError, ConfigErrorResult, DEFAULT_CONFIG_FILENAME, FileConfig, LoggingConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub file: FileConfig,
}

impl Config {
    /// Load config from the default location.
    ///
    /// Loading order:
    /// 1. ELOG_CONFIG env var names the file, else ./elog.toml
    /// 2. Load the file if it exists, else use defaults
    /// 3. Apply ELOG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Same as [`Config::load`] with an explicit file path.
    pub fn load_from(config_path: &Path) -> ConfigErrorResult<Self> {
        let mut config = if config_path.exists() {
            Self::load_toml(config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config file path.
    /// Priority: ELOG_CONFIG env var > ./elog.toml (relative to cwd)
    pub fn config_path() -> ConfigErrorResult<PathBuf> {
        if let Ok(path) = std::env::var("ELOG_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_FILENAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()?;
        self.file.validate()?;
        Ok(())
    }

    /// Directory the log files go to.
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.file.dir)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (stderr: {}, colored: {}, program: {})",
            self.logging.level,
            self.logging.to_stderr,
            self.logging.colored,
            self.logging.program_name()
        );
        info!(
            "  file: dir={}, max_size={}B, backups={}, buffer={}B, flush={}s",
            self.file.dir,
            self.file.max_file_size_bytes,
            self.file.max_backup_count,
            self.file.buffer_size_bytes,
            self.file.flush_interval_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        Self::apply_env_parse("ELOG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ELOG_LOG_TO_STDERR", &mut self.logging.to_stderr);
        Self::apply_env_bool("ELOG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ELOG_PROGRAM", &mut self.logging.program);

        // File
        Self::apply_env_string("ELOG_LOG_DIR", &mut self.file.dir);
        Self::apply_env_parse(
            "ELOG_MAX_FILE_SIZE_BYTES",
            &mut self.file.max_file_size_bytes,
        );
        Self::apply_env_parse("ELOG_MAX_BACKUP_COUNT", &mut self.file.max_backup_count);
        Self::apply_env_parse("ELOG_BUFFER_SIZE_BYTES", &mut self.file.buffer_size_bytes);
        Self::apply_env_parse(
            "ELOG_FLUSH_INTERVAL_SECS",
            &mut self.file.flush_interval_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
