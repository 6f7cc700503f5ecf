use crate::{LogSink, Result};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemoryBuffer {
    pending: Vec<u8>,
    flushed: Vec<u8>,
    flush_count: usize,
}

/// In-memory sink that models the buffer/flush split of the file sink.
///
/// Written bytes stay pending until `flush` moves them to the flushed
/// contents. Clones share the same buffer, so a handle kept outside the
/// logger can inspect what the logger wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<MemoryBuffer>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, MemoryBuffer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bytes that have been flushed.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer().flushed.clone()
    }

    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer().flushed).into_owned()
    }

    /// Bytes written but not flushed yet.
    pub fn pending(&self) -> Vec<u8> {
        self.buffer().pending.clone()
    }

    pub fn flush_count(&self) -> usize {
        self.buffer().flush_count
    }
}

impl LogSink for MemorySink {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.buffer().pending.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        let mut buffer = self.buffer();
        let pending = std::mem::take(&mut buffer.pending);
        buffer.flushed.extend_from_slice(&pending);
        buffer.flush_count += 1;
        Ok(())
    }
}
