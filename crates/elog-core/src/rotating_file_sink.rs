use crate::{BackupChain, Clock, LocalClock, LogSink, Result, RotationSettings, SinkError};

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;

struct ActiveFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ActiveFile {
    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| SinkError::flush(&self.path, e))
    }
}

/// File sink with date and size based rollover.
///
/// Every write first runs the rotation check:
/// 1. a new calendar day closes the current file;
/// 2. a live file that has taken more than `max_file_size_bytes` is closed
///    and the day's [`BackupChain`] is shifted;
/// 3. if no file is open, `<program>-<today>.log` is opened for append.
///
/// Buffered bytes are always flushed to the old file before it is closed.
/// Any filesystem error aborts the check and leaves no file open, so the
/// next write retries. A failed write also releases the live file and does
/// not count toward its size. Flushing does not fsync.
pub struct RotatingFileSink {
    chain: BackupChain,
    settings: RotationSettings,
    clock: Arc<dyn Clock>,
    active: Option<ActiveFile>,
    active_date: Option<NaiveDate>,
    bytes_written: u64,
}

impl RotatingFileSink {
    pub fn new(
        base_path: impl Into<PathBuf>,
        program: impl Into<String>,
        settings: RotationSettings,
    ) -> Self {
        Self {
            chain: BackupChain::new(base_path, program, settings.max_backup_count),
            settings,
            clock: Arc::new(LocalClock),
            active: None,
            active_date: None,
            bytes_written: 0,
        }
    }

    /// Replace the date source, mainly to drive rollover from tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_path(&self) -> &Path {
        self.chain.dir()
    }

    pub fn chain(&self) -> &BackupChain {
        &self.chain
    }

    pub fn settings(&self) -> &RotationSettings {
        &self.settings
    }

    pub fn active_date(&self) -> Option<NaiveDate> {
        self.active_date
    }

    /// Bytes accepted into the current live file since it was opened.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_path(&self) -> Option<&Path> {
        self.active.as_ref().map(|active| active.path.as_path())
    }

    fn prepare(&mut self) -> Result<&mut ActiveFile> {
        let today = self.clock.today();

        if let Some(active_date) = self.active_date
            && active_date != today
        {
            self.close_active()?;
            self.bytes_written = 0;
        }
        self.active_date = Some(today);

        if self.bytes_written > self.settings.max_file_size_bytes {
            self.close_active()?;
            self.chain.rotate(today)?;
            self.bytes_written = 0;
        }

        let active = match self.active.take() {
            Some(active) => active,
            None => self.open(today)?,
        };
        Ok(self.active.insert(active))
    }

    fn open(&mut self, today: NaiveDate) -> Result<ActiveFile> {
        let path = self.chain.live_path(today);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| SinkError::open(&path, e))?;
        self.bytes_written = 0;

        Ok(ActiveFile {
            path,
            writer: BufWriter::with_capacity(self.settings.buffer_size_bytes, file),
        })
    }

    // The handle is released even when the final flush fails.
    fn close_active(&mut self) -> Result<()> {
        match self.active.take() {
            Some(mut active) => active.flush(),
            None => Ok(()),
        }
    }
}

impl LogSink for RotatingFileSink {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let result = match self.prepare() {
            Ok(active) => active
                .writer
                .write_all(data)
                .map_err(|e| SinkError::write(&active.path, e)),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.bytes_written += data.len() as u64;
                Ok(data.len())
            }
            Err(err) => {
                // Buffer state is unknown after a failed write; reopen next time.
                if let SinkError::Write { .. } = err {
                    self.active = None;
                }
                eprintln!("{err}");
                Err(err)
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self.active {
            Some(ref mut active) => active.flush(),
            None => Ok(()),
        }
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        if let Err(err) = self.close_active() {
            eprintln!("{err}");
        }
    }
}
