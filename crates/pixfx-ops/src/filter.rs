//! Stylized filter: warm tint, vignette and film grain.
//!
//! The pipeline runs three stages over the same image:
//!
//! 1. **Warm** - `r = trunc(r * 1.2)` (clamped), `g` unchanged,
//!    `b = trunc(b / 1.5)`
//! 2. **Vignette** - blend with a halo overlay, `0.65 * image + 0.35 * halo`
//! 3. **Grain** - blend with a grain overlay, `0.95 * image + 0.05 * grain`
//!
//! Each overlay is resampled onto the image grid with its own
//! [`Resampler`](crate::resize::Resampler), so halo and grain may have
//! different sizes from each other and from the image.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::filter::{apply_filter, FilterPipeline, FilterParams};
//!
//! let img = Raster::filled(8, 6, Rgb::new(100, 150, 200)).unwrap();
//! let halo = Raster::filled(3, 3, Rgb::WHITE).unwrap();
//! let grain = Raster::filled(16, 16, Rgb::gray(128)).unwrap();
//!
//! let out = apply_filter(&img, &halo, &grain);
//! assert_eq!(out.dimensions(), (8, 6));
//!
//! // Same result through an explicit pipeline
//! let pipeline = FilterPipeline::new(&halo, &grain, FilterParams::default()).unwrap();
//! assert_eq!(pipeline.apply(&img), out);
//! ```

use crate::composite::{BlendWeights, blend_in_place};
use crate::error::ensure_finite;
use crate::{OpsError, OpsResult};
use pixfx_core::{Raster, Rgb};
use tracing::{debug, trace};

/// Tunable constants of the filter pipeline.
///
/// [`FilterParams::default`] reproduces the stock look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Multiplier applied to the red channel.
    pub warm_red: f64,
    /// Divisor applied to the blue channel.
    pub warm_blue_divisor: f64,
    /// Weights of the halo blend.
    pub vignette: BlendWeights,
    /// Weights of the grain blend.
    pub grain: BlendWeights,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            warm_red: 1.2,
            warm_blue_divisor: 1.5,
            vignette: BlendWeights::VIGNETTE,
            grain: BlendWeights::GRAIN,
        }
    }
}

impl FilterParams {
    /// Checks every parameter against its domain.
    ///
    /// # Errors
    ///
    /// [`OpsError::OutOfRange`] for a negative or non-finite red factor, a
    /// blue divisor that is not strictly positive, or invalid blend weights.
    pub fn validate(&self) -> OpsResult<()> {
        let red = ensure_finite("warm_red", self.warm_red)?;
        if red < 0.0 {
            return Err(OpsError::out_of_range("warm_red", red, ">= 0"));
        }
        let div = ensure_finite("warm_blue_divisor", self.warm_blue_divisor)?;
        if div <= 0.0 {
            return Err(OpsError::out_of_range("warm_blue_divisor", div, "> 0"));
        }
        BlendWeights::new(self.vignette.target, self.vignette.overlay)?;
        BlendWeights::new(self.grain.target, self.grain.overlay)?;
        Ok(())
    }

    /// Warm tint of a single pixel.
    #[inline]
    pub fn warm_pixel(&self, px: Rgb) -> Rgb {
        Rgb::from_f64_truncated(
            px.r as f64 * self.warm_red,
            px.g as f64,
            px.b as f64 / self.warm_blue_divisor,
        )
    }
}

/// Warm tint with the default factors.
#[inline]
pub fn warm_pixel(px: Rgb) -> Rgb {
    FilterParams::default().warm_pixel(px)
}

/// Applies the warm tint stage on its own.
pub fn warm(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "filter::warm");
    src.map(warm_pixel)
}

/// The three-stage filter bound to its two overlays.
///
/// Overlays are borrowed for the lifetime of the pipeline and never
/// modified, so one pipeline can process any number of images.
#[derive(Debug, Clone, Copy)]
pub struct FilterPipeline<'a> {
    halo: &'a Raster,
    grain: &'a Raster,
    params: FilterParams,
}

impl<'a> FilterPipeline<'a> {
    /// Creates a pipeline after validating `params`.
    pub fn new(halo: &'a Raster, grain: &'a Raster, params: FilterParams) -> OpsResult<Self> {
        params.validate()?;
        debug!(
            halo_w = halo.width(),
            halo_h = halo.height(),
            grain_w = grain.width(),
            grain_h = grain.height(),
            "filter pipeline ready"
        );
        Ok(Self {
            halo,
            grain,
            params,
        })
    }

    /// Pipeline with the default parameters.
    pub fn with_defaults(halo: &'a Raster, grain: &'a Raster) -> Self {
        Self {
            halo,
            grain,
            params: FilterParams::default(),
        }
    }

    /// Parameters in use.
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Runs all three stages and returns a new raster.
    pub fn apply(&self, src: &Raster) -> Raster {
        let mut out = src.clone();
        self.apply_in_place(&mut out);
        out
    }

    /// Runs all three stages on `img` in place.
    pub fn apply_in_place(&self, img: &mut Raster) {
        trace!(width = img.width(), height = img.height(), "filter::apply");
        let params = self.params;
        img.map_pixels(|px| params.warm_pixel(px));
        blend_in_place(img, self.halo, params.vignette);
        blend_in_place(img, self.grain, params.grain);
    }
}

/// Runs the default filter over `src` with the given halo and grain overlays.
pub fn apply_filter(src: &Raster, halo: &Raster, grain: &Raster) -> Raster {
    FilterPipeline::with_defaults(halo, grain).apply(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_form(t: Rgb, c: Rgb) -> Rgb {
        let warmed = warm_pixel(t);
        let vig = |a: u8, b: u8| (0.65 * a as f64 + 0.35 * b as f64) as u8;
        let grn = |a: u8, b: u8| (0.95 * a as f64 + 0.05 * b as f64) as u8;
        let v = Rgb::new(vig(warmed.r, c.r), vig(warmed.g, c.g), vig(warmed.b, c.b));
        Rgb::new(grn(v.r, c.r), grn(v.g, c.g), grn(v.b, c.b))
    }

    #[test]
    fn test_warm_pixel() {
        // 100 * 1.2 = 120, 200 / 1.5 = 133.33 -> 133
        assert_eq!(warm_pixel(Rgb::new(100, 50, 200)), Rgb::new(120, 50, 133));
        // 250 * 1.2 = 300 -> 255
        assert_eq!(warm_pixel(Rgb::new(250, 0, 0)).r, 255);
        assert_eq!(warm_pixel(Rgb::BLACK), Rgb::BLACK);
    }

    #[test]
    fn test_warm_raster() {
        let src = Raster::filled(3, 2, Rgb::new(10, 20, 30)).unwrap();
        let out = warm(&src);
        assert!(out.pixels().all(|(_, _, px)| px == warm_pixel(Rgb::new(10, 20, 30))));
    }

    #[test]
    fn test_uniform_overlays_closed_form() {
        let img = Raster::from_fn(9, 4, |x, y| {
            Rgb::new((x * 28) as u8, (y * 60) as u8, ((x * y * 7) % 256) as u8)
        })
        .unwrap();
        let c = Rgb::new(200, 120, 40);
        let halo = Raster::filled(5, 7, c).unwrap();
        let grain = Raster::filled(2, 3, c).unwrap();
        let out = apply_filter(&img, &halo, &grain);
        for (x, y, px) in out.pixels() {
            assert_eq!(px, closed_form(img.pixel(x, y), c), "at ({x}, {y})");
        }
    }

    #[test]
    fn test_grain_uses_own_resampler() {
        // Halo is neutral; grain is a 2x1 half-black half-white strip.
        let img = Raster::filled(4, 2, Rgb::gray(100)).unwrap();
        let halo = Raster::filled(1, 1, Rgb::gray(100)).unwrap();
        let grain = Raster::from_pixels(2, 1, vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
        let params = FilterParams {
            warm_red: 1.0,
            warm_blue_divisor: 1.0,
            vignette: BlendWeights::new(1.0, 0.0).unwrap(),
            grain: BlendWeights::new(0.0, 1.0).unwrap(),
        };
        let out = FilterPipeline::new(&halo, &grain, params).unwrap().apply(&img);
        for y in 0..2 {
            assert_eq!(
                out.row(y),
                &[Rgb::BLACK, Rgb::BLACK, Rgb::WHITE, Rgb::WHITE]
            );
        }
    }

    #[test]
    fn test_overlays_untouched_and_dims_kept() {
        let img = Raster::filled(6, 6, Rgb::gray(50)).unwrap();
        let halo = Raster::filled(10, 3, Rgb::gray(220)).unwrap();
        let grain = Raster::filled(1, 9, Rgb::gray(30)).unwrap();
        let (h0, g0) = (halo.clone(), grain.clone());
        let out = apply_filter(&img, &halo, &grain);
        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!(halo, h0);
        assert_eq!(grain, g0);

        let mut owned = img.clone();
        FilterPipeline::with_defaults(&halo, &grain).apply_in_place(&mut owned);
        assert_eq!(owned, out);
    }

    #[test]
    fn test_params_validation() {
        assert!(FilterParams::default().validate().is_ok());
        let bad = FilterParams {
            warm_blue_divisor: 0.0,
            ..FilterParams::default()
        };
        assert!(matches!(bad.validate(), Err(OpsError::OutOfRange(_))));
        let bad = FilterParams {
            warm_red: f64::INFINITY,
            ..FilterParams::default()
        };
        assert!(bad.validate().is_err());
        let halo = Raster::new(1, 1).unwrap();
        assert!(FilterPipeline::new(&halo, &halo, bad).is_err());
    }
}
