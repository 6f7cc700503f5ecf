use crate::header::format_line;
use crate::{CallSite, LogError, Result, StderrMirror};

use elog_config::{Config, FileConfig};
use elog_core::{LogSink, RotatingFileSink, RotationSettings};

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

/// Leveled front end over one sink.
///
/// All sink access (rotation, buffered write, flush) happens under a single
/// mutex, so the rotate-then-write sequence of one record never interleaves
/// with another record or with a flush. Level filtering happens before the
/// lock is taken.
pub struct Logger {
    level: LevelFilter,
    mirror: Option<StderrMirror>,
    sink: Mutex<Box<dyn LogSink>>,
    dropped: AtomicU64,
}

impl Logger {
    pub fn new<S: LogSink + 'static>(sink: S, level: LevelFilter) -> Self {
        Self {
            level,
            mirror: None,
            sink: Mutex::new(Box::new(sink)),
            dropped: AtomicU64::new(0),
        }
    }

    /// Also copy every written line to standard error.
    pub fn with_stderr_mirror(mut self, mirror: StderrMirror) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// Logger over a [`RotatingFileSink`] as described by `config`.
    ///
    /// Creates the log directory if needed. Does not validate `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dir = config.log_dir();
        std::fs::create_dir_all(&dir).map_err(|e| LogError::io(&dir, e))?;

        let sink = RotatingFileSink::new(
            dir,
            config.logging.program_name(),
            rotation_settings(&config.file),
        );
        let logger = Logger::new(sink, *config.logging.level);

        Ok(if !config.logging.to_stderr {
            logger
        } else if config.logging.colored {
            logger.with_stderr_mirror(StderrMirror::colored())
        } else {
            logger.with_stderr_mirror(StderrMirror::plain())
        })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn enabled_for(&self, level: Level) -> bool {
        level <= self.level
    }

    /// Records the sink rejected since the logger was created.
    pub fn dropped_records(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Log with the caller's location in the header.
    #[track_caller]
    pub fn log_at(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let caller = Location::caller();
        self.write_line(level, args, Some(caller.file()), Some(caller.line()))
    }

    /// Format one record and write it to the sink as a single payload.
    pub fn write_line(
        &self,
        level: Level,
        args: fmt::Arguments<'_>,
        file: Option<&str>,
        line: Option<u32>,
    ) -> Result<()> {
        if !self.enabled_for(level) {
            return Ok(());
        }

        let site = CallSite::new(file, line);
        let now = Local::now();
        let text = format_line(level, &now, &site, args);

        let mut sink = self.lock_sink();
        let result = sink.write(text.as_bytes());
        if let Some(ref mirror) = self.mirror {
            mirror.write(level, &now, &site, args);
        }
        drop(sink);

        result.map(|_| ()).map_err(|e| {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            LogError::from(e)
        })
    }

    /// Flush the sink. Failures are also reported on standard error.
    pub fn flush(&self) -> Result<()> {
        self.lock_sink().flush().map_err(|e| {
            eprintln!("{e}");
            LogError::from(e)
        })
    }

    /// Swap in a new sink; the old one is flushed first and dropped.
    pub fn replace_sink<S: LogSink + 'static>(&self, sink: S) -> Result<()> {
        let mut guard = self.lock_sink();
        let flushed = guard.flush();
        *guard = Box::new(sink);
        drop(guard);

        flushed.map_err(|e| {
            eprintln!("{e}");
            LogError::from(e)
        })
    }

    // A panic while holding the lock leaves the sink usable.
    fn lock_sink(&self) -> MutexGuard<'_, Box<dyn LogSink>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.enabled_for(metadata.level())
    }

    // Sinks report their own failures; a rejected record only bumps the
    // dropped counter here.
    fn log(&self, record: &Record<'_>) {
        let _ = self.write_line(record.level(), *record.args(), record.file(), record.line());
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

pub(crate) fn rotation_settings(file: &FileConfig) -> RotationSettings {
    RotationSettings {
        max_file_size_bytes: file.max_file_size_bytes,
        max_backup_count: file.max_backup_count,
        buffer_size_bytes: file.buffer_size_bytes,
    }
}
