use crate::{DATE_FORMAT, Result, SinkError};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Fixed-depth chain of same-day log files.
///
/// Index 0 is the live file `<program>-<date>.log`, index `i > 0` is
/// `<program>-<date>.log.<i>`; a higher index holds older content.
#[derive(Debug, Clone)]
pub struct BackupChain {
    dir: PathBuf,
    program: String,
    depth: usize,
}

impl BackupChain {
    /// A depth below 1 is raised to 1 (live file only, no backups).
    pub fn new(dir: impl Into<PathBuf>, program: impl Into<String>, depth: usize) -> Self {
        Self {
            dir: dir.into(),
            program: program.into(),
            depth: depth.max(1),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn live_path(&self, date: NaiveDate) -> PathBuf {
        self.path(date, 0)
    }

    pub fn path(&self, date: NaiveDate, index: usize) -> PathBuf {
        let live = format!("{}-{}.log", self.program, date.format(DATE_FORMAT));
        if index == 0 {
            self.dir.join(live)
        } else {
            self.dir.join(format!("{live}.{index}"))
        }
    }

    /// Shift every file of `date` up by one index, discarding the oldest.
    ///
    /// Index 0 is free afterwards. A failure part way through leaves the
    /// chain partially shifted; nothing is rolled back.
    pub fn rotate(&self, date: NaiveDate) -> Result<()> {
        let oldest = self.path(date, self.depth - 1);
        if file_exists(&oldest) {
            fs::remove_file(&oldest).map_err(|e| SinkError::remove(&oldest, e))?;
        }

        for index in (0..self.depth - 1).rev() {
            let from = self.path(date, index);
            if file_exists(&from) {
                let to = self.path(date, index + 1);
                fs::rename(&from, &to).map_err(|e| SinkError::rename(&from, &to, e))?;
            }
        }

        Ok(())
    }

    /// Paths of `date` currently on disk, ordered by index.
    pub fn existing(&self, date: NaiveDate) -> Vec<PathBuf> {
        (0..self.depth)
            .map(|index| self.path(date, index))
            .filter(|path| file_exists(path))
            .collect()
    }
}

// Anything but NotFound counts as present so the following remove or rename
// reports the real error.
fn file_exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}
