// src/reader.rs
use std::io::Read;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{BodyError, BodyResult};

/// Decodes JSON request bodies. Counterpart of `JsonBodyWriter`, registered
/// for the same media types.
pub struct JsonBodyReader;

impl JsonBodyReader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a complete request body in place, borrowing from `body` where
    /// the target type allows it.
    pub fn read_slice<'de, T: Deserialize<'de>>(&self, body: &'de [u8]) -> BodyResult<T> {
        serde_json::from_slice(body).map_err(BodyError::from_decode)
    }

    /// Decodes a request body from its input stream.
    pub fn read_from<T: DeserializeOwned, R: Read>(&self, stream: &mut R) -> BodyResult<T> {
        serde_json::from_reader(stream).map_err(BodyError::from_decode)
    }
}

impl Default for JsonBodyReader {
    fn default() -> Self {
        Self::new()
    }
}
