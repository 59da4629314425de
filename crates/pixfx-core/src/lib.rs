//! # pixfx-core
//!
//! Core types for deterministic 8-bit RGB image processing.
//!
//! This crate provides the foundational types used throughout pixfx:
//!
//! - [`Rgb`] - 8-bit RGB pixel, channels always within `[0, 255]`
//! - [`Hsl`] - Hue/saturation/lightness triple with RGB conversion
//! - [`Raster`] - Owned width x height grid of [`Rgb`] pixels
//! - [`Error`] - Construction and bounds errors
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. Everything else builds on it:
//!
//! ```text
//! pixfx-core (this crate)
//!    ^
//!    |
//!    +-- pixfx-ops (transforms, blends, filter pipeline)
//!    +-- pixfx-io  (decode / encode)
//!    +-- pixfx-cli
//! ```
//!
//! ## Example
//!
//! ```
//! use pixfx_core::prelude::*;
//!
//! let mut raster = Raster::filled(4, 2, Rgb::new(255, 0, 0)).unwrap();
//! raster.set_pixel(1, 1, Rgb::WHITE);
//!
//! let hsl = raster.pixel(0, 0).to_hsl();
//! assert_eq!(hsl.hue(), 0.0);
//! assert_eq!(hsl.saturation(), 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod hsl;
pub mod pixel;
pub mod raster;

// Re-exports for convenience
pub use error::*;
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use pixel::{LUMINANCE_WEIGHTS, Rgb, channel_from_f64};
pub use raster::Raster;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hsl::Hsl;
    pub use crate::pixel::Rgb;
    pub use crate::raster::Raster;
}
