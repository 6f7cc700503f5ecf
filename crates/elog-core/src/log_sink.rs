use crate::Result;

/// Destination for formatted log lines.
///
/// Implementations are not required to be thread-safe on their own: the
/// logger owns the sink behind a single lock and serializes every call.
/// A failed `write` is reported on standard error by the sink itself; the
/// logger only counts the record as dropped.
pub trait LogSink: Send {
    /// Accept one formatted payload, returning the number of bytes taken.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Push buffered bytes to the underlying destination.
    fn flush(&mut self) -> Result<()>;
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
