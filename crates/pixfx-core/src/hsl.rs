//! HSL color representation and RGB conversion.
//!
//! Hue is an angle in degrees in `[0, 360)`. Saturation and lightness are in
//! `[0, 1]`. [`Hsl`] keeps those invariants on every constructor: hue wraps,
//! saturation and lightness clamp.
//!
//! # Conversion
//!
//! ```text
//! l = (max + min) / 2
//! s = 0                          if max == min
//!     (max - min) / (1 - |2l-1|) otherwise
//! h = 60 * ((g - b) / d mod 6)   if max == r
//!     60 * ((b - r) / d + 2)     if max == g
//!     60 * ((r - g) / d + 4)     if max == b
//! ```
//!
//! Achromatic pixels get hue 0. The inverse conversion rounds each channel
//! to the nearest integer, so RGB -> HSL -> RGB is stable to within one unit.
//!
//! # Example
//!
//! ```
//! use pixfx_core::{Hsl, Rgb};
//!
//! let hsl = Hsl::from_rgb(Rgb::new(0, 255, 0));
//! assert_eq!(hsl.hue(), 120.0);
//!
//! let shifted = hsl.rotate_hue(240.0);
//! assert_eq!(shifted.to_rgb(), Rgb::new(255, 0, 0));
//! ```

use crate::pixel::Rgb;

/// Hue, saturation, lightness triple.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

/// Wraps a hue angle into `[0, 360)`. Non-finite angles map to 0.
#[inline]
fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamps to `[0, 1]`. NaN maps to 0.
#[inline]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

impl Hsl {
    /// Creates an HSL value, wrapping hue and clamping saturation/lightness.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(self) -> f64 {
        self.h
    }

    /// Saturation, `[0, 1]`.
    #[inline]
    pub fn saturation(self) -> f64 {
        self.s
    }

    /// Lightness, `[0, 1]`.
    #[inline]
    pub fn lightness(self) -> f64 {
        self.l
    }

    /// Returns a copy with the hue replaced (wrapped into `[0, 360)`).
    #[inline]
    pub fn with_hue(self, h: f64) -> Self {
        Self::new(h, self.s, self.l)
    }

    /// Returns a copy with the saturation replaced (clamped).
    #[inline]
    pub fn with_saturation(self, s: f64) -> Self {
        Self::new(self.h, s, self.l)
    }

    /// Returns a copy with the lightness replaced (clamped).
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Adds `degrees` to the hue, modulo 360.
    #[inline]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        self.with_hue(self.h + degrees)
    }

    /// Adds `delta` to the saturation, then clamps to `[0, 1]`.
    #[inline]
    pub fn shift_saturation(self, delta: f64) -> Self {
        self.with_saturation(self.s + delta)
    }

    /// Adds `delta` to the lightness, then clamps to `[0, 1]`.
    #[inline]
    pub fn shift_lightness(self, delta: f64) -> Self {
        self.with_lightness(self.l + delta)
    }

    /// Converts an RGB pixel to HSL.
    #[inline]
    pub fn from_rgb(px: Rgb) -> Self {
        let (h, s, l) = rgb_to_hsl(px.r, px.g, px.b);
        Self { h, s, l }
    }

    /// Converts back to an RGB pixel.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsl_to_rgb(self.h, self.s, self.l);
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for Hsl {
    fn from(px: Rgb) -> Self {
        Self::from_rgb(px)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

/// Converts 8-bit RGB channels to `(hue, saturation, lightness)`.
///
/// ```
/// use pixfx_core::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl(255, 0, 0), (0.0, 1.0, 0.5));
/// assert_eq!(rgb_to_hsl(128, 128, 128).1, 0.0);
/// ```
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = (delta / (1.0 - (2.0 * l - 1.0).abs())).min(1.0);

    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (wrap_hue(h), s, l)
}

/// Converts `(hue, saturation, lightness)` to 8-bit RGB channels.
///
/// Hue is wrapped and saturation/lightness clamped before conversion. Each
/// output channel is rounded to the nearest integer and clamped to `[0, 255]`.
///
/// ```
/// use pixfx_core::hsl_to_rgb;
///
/// assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), (0, 0, 255));
/// assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = wrap_hue(h);
    let s = clamp_unit(s);
    let l = clamp_unit(l);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
