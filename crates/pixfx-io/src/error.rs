//! Error types for I/O operations.
//!
//! Every decode and encode path reports through [`IoError`]. Overlay loads
//! collapse their failures into [`IoError::ResourceUnavailable`] so callers
//! can tell a missing halo or grain image apart from a bad input image.

use std::io;
use std::path::Path;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Path does not point to a readable image file.
    #[error("not an image file: {0}")]
    InvalidFile(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color type.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// An auxiliary image could not be loaded.
    #[error("resource unavailable: {path}: {reason}")]
    ResourceUnavailable {
        /// Path of the resource.
        path: String,
        /// Underlying failure.
        reason: String,
    },

    /// Decoded data does not form a valid raster.
    #[error(transparent)]
    Core(#[from] pixfx_core::Error),
}

impl IoError {
    /// Wraps any failure as [`IoError::ResourceUnavailable`] for `path`.
    pub fn resource_unavailable(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::ResourceUnavailable {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` for [`IoError::ResourceUnavailable`].
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
