//! Weighted overlay blending.
//!
//! An overlay raster is resampled onto the target grid (see
//! [`Resampler`]) and mixed channel by channel:
//!
//! ```text
//! out = trunc(w_target * target + w_overlay * overlay), clamped to [0, 255]
//! ```
//!
//! The overlay is only read, never modified, and may have any dimensions.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::composite::{blend, BlendWeights};
//!
//! let target = Raster::filled(4, 4, Rgb::gray(100)).unwrap();
//! let overlay = Raster::filled(1, 1, Rgb::gray(200)).unwrap();
//!
//! let mixed = blend(&target, &overlay, BlendWeights::VIGNETTE);
//! let expected = (0.65 * 100.0 + 0.35 * 200.0) as u8;
//! assert_eq!(mixed.pixel(3, 3), Rgb::gray(expected));
//! ```

use crate::resize::Resampler;
use crate::{OpsError, OpsResult};
use pixfx_core::{Raster, Rgb};
use tracing::trace;

/// Weights of a two-input channel blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    /// Weight of the target pixel.
    pub target: f64,
    /// Weight of the resampled overlay pixel.
    pub overlay: f64,
}

impl BlendWeights {
    /// Vignette stage of the filter pipeline: 65% image, 35% halo.
    pub const VIGNETTE: Self = Self {
        target: 0.65,
        overlay: 0.35,
    };

    /// Grain stage of the filter pipeline: 95% image, 5% grain.
    pub const GRAIN: Self = Self {
        target: 0.95,
        overlay: 0.05,
    };

    /// Creates weights, rejecting negative or non-finite values.
    ///
    /// The weights need not sum to one; results are clamped per channel.
    pub fn new(target: f64, overlay: f64) -> OpsResult<Self> {
        for (name, w) in [("target weight", target), ("overlay weight", overlay)] {
            if !w.is_finite() || w < 0.0 {
                return Err(OpsError::out_of_range(name, w, "a finite value >= 0"));
            }
        }
        Ok(Self { target, overlay })
    }

    /// Mixes a single pair of pixels.
    #[inline]
    pub fn mix(self, target: Rgb, overlay: Rgb) -> Rgb {
        let t = target.to_f64_array();
        let o = overlay.to_f64_array();
        Rgb::from_f64_truncated(
            self.target * t[0] + self.overlay * o[0],
            self.target * t[1] + self.overlay * o[1],
            self.target * t[2] + self.overlay * o[2],
        )
    }
}

/// Blends `overlay` onto `target`, returning a new raster sized like `target`.
pub fn blend(target: &Raster, overlay: &Raster, weights: BlendWeights) -> Raster {
    trace!(
        width = target.width(),
        height = target.height(),
        overlay_w = overlay.width(),
        overlay_h = overlay.height(),
        "composite::blend"
    );
    let resampler = Resampler::between(target, overlay);
    target.map_with_coords(|x, y, px| weights.mix(px, resampler.sample(overlay, x, y)))
}

/// In-place variant of [`blend`].
pub fn blend_in_place(target: &mut Raster, overlay: &Raster, weights: BlendWeights) {
    trace!(
        width = target.width(),
        height = target.height(),
        overlay_w = overlay.width(),
        overlay_h = overlay.height(),
        "composite::blend_in_place"
    );
    let resampler = Resampler::between(target, overlay);
    target.map_pixels_with_coords(|x, y, px| weights.mix(px, resampler.sample(overlay, x, y)));
}
