//! Error types for pixfx-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of building and addressing a
//! [`Raster`](crate::Raster):
//! - zero-sized or overflowing dimensions
//! - pixel buffers whose length does not match the dimensions
//! - checked pixel access outside the grid
//!
//! # Usage
//!
//! ```rust
//! use pixfx_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, 0, 2, 2).is_err());
//! ```
//!
//! # Used By
//!
//! - [`crate::raster::Raster`] - construction and checked access
//! - `pixfx-ops` - wrapped as `OpsError::InvalidInput`
//! - `pixfx-io` - wrapped when decoded data does not fit a raster

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing a raster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Pixel coordinates are outside raster bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixfx_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel ({x}, {y}) out of bounds for raster {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Raster width
        width: u32,
        /// Raster height
        height: u32,
    },

    /// Invalid raster dimensions.
    ///
    /// Returned when width or height is zero, when the pixel count would
    /// overflow, or when a supplied buffer has the wrong length.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
