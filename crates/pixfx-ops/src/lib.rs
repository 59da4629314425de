//! # pixfx-ops
//!
//! Deterministic image operations over [`pixfx_core::Raster`].
//!
//! Every operation borrows its input and returns a new raster. Operations
//! that keep the dimensions also come as `*_in_place` variants taking
//! `&mut Raster`.
//!
//! # Modules
//!
//! - [`color`] - grayscale, invert, sepia
//! - [`threshold`] - black/white at the median luminance
//! - [`transform`] - quarter-turn rotations
//! - [`adjust`] - HSL hue, saturation and lightness
//! - [`resize`] - nearest-neighbor resampling
//! - [`composite`] - weighted overlay blends
//! - [`filter`] - warm + vignette + grain pipeline
//! - [`operation`] - [`Operation`] values parsed from strings
//! - `parallel` - batch processing with Rayon (feature `parallel`)
//!
//! # Numeric Conventions
//!
//! Floating point results are truncated toward zero and clamped to
//! `[0, 255]` when written back to a channel. The one exception is
//! HSL -> RGB conversion, which rounds to nearest.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::prelude::*;
//!
//! let img = Raster::from_pixels(
//!     2,
//!     2,
//!     vec![
//!         Rgb::new(255, 0, 0),
//!         Rgb::new(0, 255, 0),
//!         Rgb::new(0, 0, 255),
//!         Rgb::new(255, 255, 255),
//!     ],
//! )
//! .unwrap();
//!
//! let gray = grayscale(&img);
//! assert_eq!(gray.pixel(0, 0), Rgb::gray(85));
//! assert_eq!(gray.pixel(1, 1), Rgb::gray(255));
//!
//! let spun = rotate_cw(&rotate_cw(&rotate_cw(&rotate_cw(&img))));
//! assert_eq!(spun, img);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod adjust;
pub mod color;
pub mod composite;
pub mod filter;
pub mod operation;
pub mod resize;
pub mod threshold;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use adjust::{set_hue, set_lightness, set_saturation};
pub use color::{grayscale, invert, sepia};
pub use composite::BlendWeights;
pub use error::{OpsError, OpsResult};
pub use filter::{FilterParams, FilterPipeline, apply_filter};
pub use operation::Operation;
pub use resize::{Resampler, map_coordinate, resize_nearest};
pub use threshold::black_white_threshold;
pub use transform::rotate_cw;

/// Prelude with the operation surface.
///
/// ```rust
/// use pixfx_ops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adjust::{set_hue, set_lightness, set_saturation};
    pub use crate::color::{grayscale, invert, sepia};
    pub use crate::filter::{FilterParams, FilterPipeline, apply_filter};
    pub use crate::threshold::black_white_threshold;
    pub use crate::transform::rotate_cw;
    pub use crate::{OpsError, OpsResult, Operation};
}
