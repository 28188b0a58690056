// src/context.rs
use std::io;

use crate::headers::HeaderMap;
use crate::sink::ResponseSink;

/// Per-exchange response state handed to a body writer.
pub trait ResponseContext {
    type Sink: ResponseSink;

    /// Response headers. Mutable until the status line goes on the wire.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Returns the exchange's output stream, creating it on first use.
    /// Repeated calls within one exchange return the same stream.
    fn output_stream(&mut self) -> io::Result<&mut Self::Sink>;
}
