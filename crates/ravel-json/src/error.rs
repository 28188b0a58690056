use std::io;

/// Error type for JSON body reading and writing.
#[derive(Debug)]
pub enum BodyError {
    /// Underlying I/O error from the response or request stream.
    Io(io::Error),
    /// The value has no JSON representation (e.g. a map keyed by non-strings).
    Serialize(serde_json::Error),
    /// The request body is not valid JSON for the expected shape.
    Deserialize(serde_json::Error),
}

impl BodyError {
    /// Classifies a serializer error: an I/O failure surfacing through
    /// serde_json is a stream failure, everything else is an unsupported
    /// value shape.
    pub(crate) fn from_encode(e: serde_json::Error) -> Self {
        if e.is_io() {
            BodyError::Io(io::Error::new(
                e.io_error_kind().unwrap_or(io::ErrorKind::Other),
                e,
            ))
        } else {
            BodyError::Serialize(e)
        }
    }

    /// Same classification for the decode path.
    pub(crate) fn from_decode(e: serde_json::Error) -> Self {
        if e.is_io() {
            BodyError::Io(io::Error::new(
                e.io_error_kind().unwrap_or(io::ErrorKind::Other),
                e,
            ))
        } else {
            BodyError::Deserialize(e)
        }
    }
}

impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::Io(e) => write!(f, "I/O error: {}", e),
            BodyError::Serialize(e) => write!(f, "Serialize error: {}", e),
            BodyError::Deserialize(e) => write!(f, "Deserialize error: {}", e),
        }
    }
}

impl std::error::Error for BodyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BodyError::Io(e) => Some(e),
            BodyError::Serialize(e) | BodyError::Deserialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for BodyError {
    fn from(e: io::Error) -> Self {
        BodyError::Io(e)
    }
}

pub type BodyResult<T> = Result<T, BodyError>;
