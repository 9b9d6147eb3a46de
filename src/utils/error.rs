//! Error types for the I/O boundary.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The comparison itself never fails; only loading and writing documents can.

use thiserror::Error;

/// Errors that can occur while loading an input document
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Input is not valid JSON: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Invalid input source: {0}")]
    InvalidSource(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
