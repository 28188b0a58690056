// src/lib.rs
pub mod body;
pub mod config;
pub mod error;
pub mod guard;
pub mod reader;
pub mod writer;

// Re-exports for users
pub use body::{Body, Encode};
pub use config::JsonConfig;
pub use error::{BodyError, BodyResult};
pub use reader::JsonBodyReader;
pub use writer::JsonBodyWriter;
