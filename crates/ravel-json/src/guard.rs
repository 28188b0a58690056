// src/guard.rs
use std::fmt;
use std::io::{self, IoSlice, Write};

/// Shields a response stream from flush and close for the duration of one
/// encode call.
///
/// Every write is forwarded verbatim; `flush` is absorbed. The guard does not
/// implement `ResponseSink`, so the wrapped stream can only be finalized by
/// whoever still holds it directly. Exception-mapping middleware relies on
/// this: until the writer commits, the stream must stay open so a substitute
/// body can still be written.
///
/// Created immediately before one encode call, dropped immediately after.
pub struct SinkGuard<'a, W: Write + ?Sized> {
    inner: &'a mut W,
}

impl<'a, W: Write + ?Sized> SinkGuard<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner }
    }
}

impl<W: Write + ?Sized> Write for SinkGuard<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        self.inner.write_vectored(bufs)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.inner.write_fmt(args)
    }

    // Flushing is the stream owner's decision, not the writer's.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
