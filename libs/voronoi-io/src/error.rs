//! # I/O Errors
//!
//! Error types for mesh loading and saving.
//!
//! The pipeline contract requires a missing file and a malformed file to be
//! distinguishable conditions, so they are separate variants rather than one
//! catch-all.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while loading or saving a mesh.
#[derive(Debug, Error)]
pub enum IoError {
    /// The path does not exist or is not a readable file.
    #[error("STL file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension is not `.stl`.
    #[error("unsupported mesh format '.{extension}': expected an STL file")]
    UnknownFormat { extension: String },

    /// The file exists but its content is not valid STL.
    #[error("failed to parse STL data: {message}")]
    InvalidContent { message: String },

    /// A binary STL body ended before the declared triangle count.
    #[error("truncated binary STL: expected {expected} triangles, got {got}")]
    InvalidFaceCount { expected: u32, got: u32 },

    /// The file parsed but contains no geometry.
    #[error("STL file '{path}' does not contain any geometry")]
    EmptyMesh { path: PathBuf },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ASCII STL data was not valid UTF-8.
    #[error("invalid UTF-8 in ASCII STL: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A vertex coordinate could not be parsed.
    #[error("invalid coordinate in ASCII STL: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl IoError {
    /// Creates an `InvalidContent` error with the given message.
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
