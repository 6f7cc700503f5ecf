#![allow(dead_code)]

use elog::{Config, LogLevel};

use std::path::{Path, PathBuf};

use chrono::Local;
use log::LevelFilter;

pub const PROGRAM: &str = "itest";

/// Config writing `PROGRAM` logs into `dir`, no stderr mirror.
pub fn config_in(dir: &Path) -> Config {
    let mut config = Config::default();
    config.logging.level = LogLevel(LevelFilter::Info);
    config.logging.program = Some(PROGRAM.to_string());
    config.file.dir = dir.to_string_lossy().into_owned();
    config.file.buffer_size_bytes = 4096;
    config
}

/// Live log file for today.
pub fn live_file(dir: &Path) -> PathBuf {
    let today = Local::now().date_naive().format("%Y-%m-%d");
    dir.join(format!("{PROGRAM}-{today}.log"))
}

pub fn read_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
