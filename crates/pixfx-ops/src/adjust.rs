//! HSL adjustments: hue rotation, saturation and lightness shifts.
//!
//! Each pixel goes RGB -> HSL, one component receives an additive delta,
//! then HSL -> RGB. Hue wraps modulo 360; saturation and lightness clamp to
//! `[0, 1]` after the addition.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::adjust::{set_hue, set_lightness};
//!
//! let red = Raster::filled(2, 2, Rgb::new(255, 0, 0)).unwrap();
//!
//! let green = set_hue(&red, 120);
//! assert_eq!(green.pixel(0, 0), Rgb::new(0, 255, 0));
//!
//! let white = set_lightness(&red, 1.0).unwrap();
//! assert_eq!(white.pixel(1, 1), Rgb::WHITE);
//! ```

use crate::OpsResult;
use crate::error::ensure_finite;
use pixfx_core::{Hsl, Raster, Rgb};
use tracing::trace;

#[inline]
fn hue_pixel(px: Rgb, degrees: f64) -> Rgb {
    Hsl::from_rgb(px).rotate_hue(degrees).to_rgb()
}

#[inline]
fn saturation_pixel(px: Rgb, delta: f64) -> Rgb {
    Hsl::from_rgb(px).shift_saturation(delta).to_rgb()
}

#[inline]
fn lightness_pixel(px: Rgb, delta: f64) -> Rgb {
    Hsl::from_rgb(px).shift_lightness(delta).to_rgb()
}

/// Rotates the hue of every pixel by `degrees` (any sign, wraps modulo 360).
pub fn set_hue(src: &Raster, degrees: i32) -> Raster {
    trace!(width = src.width(), height = src.height(), degrees, "adjust::hue");
    let degrees = degrees as f64;
    src.map(|px| hue_pixel(px, degrees))
}

/// In-place variant of [`set_hue`].
pub fn set_hue_in_place(img: &mut Raster, degrees: i32) {
    trace!(width = img.width(), height = img.height(), degrees, "adjust::hue_in_place");
    let degrees = degrees as f64;
    img.map_pixels(|px| hue_pixel(px, degrees));
}

/// Adds `delta` to the saturation of every pixel, clamping to `[0, 1]`.
///
/// # Errors
///
/// [`OpsError::OutOfRange`](crate::OpsError::OutOfRange) if `delta` is NaN
/// or infinite.
pub fn set_saturation(src: &Raster, delta: f64) -> OpsResult<Raster> {
    trace!(width = src.width(), height = src.height(), delta, "adjust::saturation");
    let delta = ensure_finite("saturation delta", delta)?;
    Ok(src.map(|px| saturation_pixel(px, delta)))
}

/// In-place variant of [`set_saturation`].
pub fn set_saturation_in_place(img: &mut Raster, delta: f64) -> OpsResult<()> {
    trace!(width = img.width(), height = img.height(), delta, "adjust::saturation_in_place");
    let delta = ensure_finite("saturation delta", delta)?;
    img.map_pixels(|px| saturation_pixel(px, delta));
    Ok(())
}

/// Adds `delta` to the lightness of every pixel, clamping to `[0, 1]`.
///
/// # Errors
///
/// [`OpsError::OutOfRange`](crate::OpsError::OutOfRange) if `delta` is NaN
/// or infinite.
pub fn set_lightness(src: &Raster, delta: f64) -> OpsResult<Raster> {
    trace!(width = src.width(), height = src.height(), delta, "adjust::lightness");
    let delta = ensure_finite("lightness delta", delta)?;
    Ok(src.map(|px| lightness_pixel(px, delta)))
}

/// In-place variant of [`set_lightness`].
pub fn set_lightness_in_place(img: &mut Raster, delta: f64) -> OpsResult<()> {
    trace!(width = img.width(), height = img.height(), delta, "adjust::lightness_in_place");
    let delta = ensure_finite("lightness delta", delta)?;
    img.map_pixels(|px| lightness_pixel(px, delta));
    Ok(())
}
