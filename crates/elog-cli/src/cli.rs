use crate::CliResult;

use elog_config::{Config, LogLevel};

use std::path::PathBuf;

use clap::Parser;
use log::Level;

/// Flags layered over the config file and `ELOG_*` environment variables.
#[derive(Parser, Debug)]
#[command(name = "elog")]
#[command(about = "Write standard input to rotating, leveled log files")]
#[command(version)]
pub struct Cli {
    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_path: Option<String>,

    /// Lowest level written (debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Also copy every line to standard error
    #[arg(long)]
    pub log_to_stderr: bool,

    /// Seconds between background flushes
    #[arg(long, value_name = "SECS")]
    pub log_flush_time: Option<u64>,

    /// Program name used in log file names
    #[arg(long)]
    pub program: Option<String>,

    /// Config file (defaults to ELOG_CONFIG, then ./elog.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Size in bytes past which the live file is rotated
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Files kept per day, live file included
    #[arg(long, value_name = "COUNT")]
    pub max_backups: Option<usize>,

    /// Level each input line is logged at
    #[arg(long, default_value = "info")]
    pub level: Level,
}

impl Cli {
    /// Load the config file, apply these flags on top and validate.
    pub fn load_config(&self) -> CliResult<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overwrite the settings named on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref dir) = self.log_path {
            config.file.dir = dir.clone();
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if self.log_to_stderr {
            config.logging.to_stderr = true;
        }
        if let Some(secs) = self.log_flush_time {
            config.file.flush_interval_secs = secs;
        }
        if let Some(ref program) = self.program {
            config.logging.program = Some(program.clone());
        }
        if let Some(bytes) = self.max_file_size {
            config.file.max_file_size_bytes = bytes;
        }
        if let Some(count) = self.max_backups {
            config.file.max_backup_count = count;
        }
    }
}
