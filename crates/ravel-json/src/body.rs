// src/body.rs
use std::io::Write;

use serde::Serialize;

use crate::config::JsonConfig;
use crate::error::{BodyError, BodyResult};

/// A response body, resolved once at the handler boundary.
///
/// The split exists because the encoder would wrap a plain string in quotes:
/// a handler that already built the exact text it wants on the wire uses
/// `Text`, everything else goes through the encoder as `Json`.
pub enum Body<'a> {
    /// Literal text, written as-is.
    Text(&'a str),
    /// A structured value, encoded as JSON.
    Json(&'a dyn Encode),
}

impl<'a> Body<'a> {
    pub fn text(text: &'a str) -> Self {
        Body::Text(text)
    }

    pub fn json<T: Serialize>(value: &'a T) -> Self {
        Body::Json(value)
    }
}

/// Object-safe bridge from a statically resolved `serde::Serialize` impl.
///
/// The serializer is picked where the `Body` is built, against the declared
/// type; the writer only ever sees the erased encoder.
pub trait Encode {
    /// Encodes `self` onto `sink` incrementally.
    fn encode_to(&self, sink: &mut dyn Write, config: &JsonConfig) -> BodyResult<()>;
}

impl<T: Serialize> Encode for T {
    fn encode_to(&self, sink: &mut dyn Write, config: &JsonConfig) -> BodyResult<()> {
        let result = if config.pretty {
            serde_json::to_writer_pretty(&mut *sink, self)
        } else {
            serde_json::to_writer(&mut *sink, self)
        };
        result.map_err(BodyError::from_encode)
    }
}
