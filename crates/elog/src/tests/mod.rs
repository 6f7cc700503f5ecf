
use crate::{LogSink, SinkError};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Sink that records every `write` call as a separate payload.
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    pub(crate) writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingSink {
    pub(crate) fn payloads(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|w| String::from_utf8(w.clone()).unwrap())
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn write(&mut self, data: &[u8]) -> elog_core::Result<usize> {
        self.writes.lock().unwrap().push(data.to_vec());
        Ok(data.len())
    }

    fn flush(&mut self) -> elog_core::Result<()> {
        Ok(())
    }
}

/// Sink whose writes and flushes always fail.
pub(crate) struct FailingSink;

impl LogSink for FailingSink {
    fn write(&mut self, _data: &[u8]) -> elog_core::Result<usize> {
        Err(SinkError::other("disk unavailable"))
    }

    fn flush(&mut self) -> elog_core::Result<()> {
        Err(SinkError::other("disk unavailable"))
    }
}

/// Sink whose flush takes `delay` and records the most flushes seen running
/// at the same time.
#[derive(Clone)]
pub(crate) struct SlowFlushSink {
    delay: Duration,
    running: Arc<AtomicUsize>,
    pub(crate) max_running: Arc<AtomicUsize>,
    pub(crate) flushes: Arc<AtomicUsize>,
}

impl SlowFlushSink {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            running: Arc::new(AtomicUsize::new(0)),
            max_running: Arc::new(AtomicUsize::new(0)),
            flushes: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl LogSink for SlowFlushSink {
    fn write(&mut self, data: &[u8]) -> elog_core::Result<usize> {
        Ok(data.len())
    }

    fn flush(&mut self) -> elog_core::Result<()> {
        let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_running.fetch_max(now, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.running.fetch_sub(1, Ordering::SeqCst);
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
