// src/writer.rs
use std::io::Write;

use ravel_http::context::ResponseContext;
use ravel_http::headers::{HeaderMap, set_content_type_if_necessary};
use ravel_http::media::APPLICATION_JSON;
use ravel_http::sink::ResponseSink;

use crate::body::Body;
use crate::config::JsonConfig;
use crate::error::BodyResult;
use crate::guard::SinkGuard;

/// Writes response bodies as JSON.
///
/// Media-type selection is the dispatch layer's job: by the time a call
/// lands here the exchange has already negotiated one of
/// `ravel_http::media::JSON_MEDIA_TYPES`.
pub struct JsonBodyWriter {
    config: JsonConfig,
}

impl JsonBodyWriter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Encodes `body` onto `sink`, streaming structured values incrementally.
    ///
    /// Used where the infrastructure around the stream boundary owns
    /// finalization; this method neither flushes nor closes. Errors from the
    /// serializer or the sink propagate unchanged.
    pub fn write_to<W: Write>(
        &self,
        body: &Body<'_>,
        headers: &mut HeaderMap,
        sink: &mut W,
    ) -> BodyResult<()> {
        set_content_type_if_necessary(headers, APPLICATION_JSON);
        match body {
            Body::Text(text) => sink.write_all(text.as_bytes())?,
            Body::Json(value) => value.encode_to(sink, &self.config)?,
        }
        Ok(())
    }

    /// Encodes `body` onto the exchange's output stream, then finalizes it.
    ///
    /// The stream is shielded by a `SinkGuard` while bytes are produced, and
    /// structured values are fully materialized before the first byte goes
    /// out. On failure the stream is left open on purpose: the surrounding
    /// exception mapping may still replace the body on the same connection.
    pub fn write_response<C: ResponseContext>(
        &self,
        body: &Body<'_>,
        ctx: &mut C,
    ) -> BodyResult<()> {
        set_content_type_if_necessary(ctx.headers_mut(), APPLICATION_JSON);
        let original = ctx.output_stream()?;
        let mut guard = SinkGuard::new(&mut *original);
        match body {
            Body::Text(text) => guard.write_all(text.as_bytes())?,
            Body::Json(value) => {
                let mut buf = Vec::with_capacity(128);
                value.encode_to(&mut buf, &self.config)?;
                guard.write_all(&buf)?;
            }
        }
        // Not a scoped release: closing on drop would finalize the stream
        // even when an encode error still needs mapping upstream.
        original.close()?;
        Ok(())
    }
}

impl Default for JsonBodyWriter {
    fn default() -> Self {
        Self::new(JsonConfig::default())
    }
}
