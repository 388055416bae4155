//! Error handling for Ghosty
//!
//! Provides the error types for the editor layers:
//! - Project errors (malformed or unreadable project documents)
//! - Image errors (background decode, mask encode)
//!
//! All error types use `thiserror` for ergonomic error handling. A dismissed dialog
//! is never an error: callers model it as `Ok(None)` / `Ok(false)`.

use thiserror::Error;

/// Project document error type
///
/// Represents problems with the content of a project file. Missing optional fields
/// are not errors; they are defaulted during load.
#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    /// The world size is zero or negative
    #[error("Invalid world size {width}x{height}")]
    InvalidWorldSize {
        /// The requested width.
        width: i64,
        /// The requested height.
        height: i64,
    },

    /// A record referenced by index does not exist
    #[error("No {kind} at index {index}")]
    NoSuchItem {
        /// The item kind ("stroke" or "door").
        kind: String,
        /// The requested index.
        index: usize,
    },

    /// No document is open
    #[error("No open document")]
    NoDocument,

    /// The embedded background could not be decoded from base64
    #[error("Embedded background is not valid base64: {reason}")]
    BadEmbeddedBackground {
        /// The decoder's message.
        reason: String,
    },
}

/// Image error type
///
/// Represents failures of the image decode/encode collaborator.
#[derive(Error, Debug)]
pub enum ImageError {
    /// Background image could not be decoded
    #[error("Failed to decode image {source_name}: {source}")]
    Decode {
        /// Where the bytes came from (a path or "embedded").
        source_name: String,
        /// The underlying codec error.
        #[source]
        source: image::ImageError,
    },

    /// Mask could not be encoded or written
    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// Pixel buffer dimensions do not match the world
    #[error("Invalid buffer size {width}x{height}")]
    InvalidSize {
        /// Buffer width.
        width: u32,
        /// Buffer height.
        height: u32,
    },
}

/// Main error type for Ghosty
///
/// A unified error type used in the public APIs of the library crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Project content error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Image codec error
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or shape error
    #[error("Malformed project data: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an I/O error (disk full, permission denied, missing file)
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a malformed-data error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Json(_) | Error::Project(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
