// src/config.rs

/// Serializer settings, supplied by the host application and read-only
/// during encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfig {
    /// Emit indented output instead of the compact default.
    pub pretty: bool,
}

impl JsonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
