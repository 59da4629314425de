//! 8-bit RGB pixel type.
//!
//! [`Rgb`] stores each channel as a `u8`, so a pixel can never hold a value
//! outside `[0, 255]`. Arithmetic done by the operations happens in wider
//! types and comes back through one of the saturating constructors:
//!
//! - [`Rgb::saturating`] - from `i32`, clamped
//! - [`Rgb::from_f64_truncated`] - from `f64`, truncated toward zero, clamped
//!
//! # Memory Layout
//!
//! `#[repr(C)]` with fields in `[R, G, B]` order, so a `&[Rgb]` has the same
//! layout as an interleaved RGB8 byte buffer.
//!
//! # Used By
//!
//! - [`crate::raster::Raster`] - pixel storage
//! - [`crate::hsl`] - color space conversion
//! - `pixfx-ops` - per-pixel arithmetic

use crate::hsl::Hsl;
use std::fmt;

/// Channel weights of the quadratic luminance estimate, as [R, G, B].
///
/// `Y = sqrt(0.299 * R^2 + 0.587 * G^2 + 0.114 * B^2)`
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Converts a floating point channel value to `u8`.
///
/// Truncates toward zero, then clamps to `[0, 255]`. NaN maps to 0.
///
/// # Example
///
/// ```
/// use pixfx_core::channel_from_f64;
///
/// assert_eq!(channel_from_f64(254.99), 254);
/// assert_eq!(channel_from_f64(306.0), 255);
/// assert_eq!(channel_from_f64(-3.5), 0);
/// ```
#[inline]
pub fn channel_from_f64(v: f64) -> u8 {
    (v as i64).clamp(0, 255) as u8
}

/// 8-bit RGB pixel.
///
/// # Example
///
/// ```
/// use pixfx_core::Rgb;
///
/// let px = Rgb::new(255, 128, 64);
/// assert_eq!(px.to_array(), [255, 128, 64]);
/// assert_eq!(Rgb::saturating(300, -4, 12), Rgb::new(255, 0, 12));
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
}

impl Rgb {
    /// Pure black `(0, 0, 0)`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white `(255, 255, 255)`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale pixel with equal RGB values.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Create a pixel from wide integer channels, clamping each to `[0, 255]`.
    #[inline]
    pub fn saturating(r: i32, g: i32, b: i32) -> Self {
        Self::new(
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
        )
    }

    /// Create a pixel from float channels using [`channel_from_f64`].
    #[inline]
    pub fn from_f64_truncated(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel_from_f64(r), channel_from_f64(g), channel_from_f64(b))
    }

    /// Get RGB values as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Channels widened to `f64`, in `[0, 255]`.
    #[inline]
    pub fn to_f64_array(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Returns `true` if all three channels are equal.
    #[inline]
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Perceptual brightness estimate on the `[0, 255]` scale.
    ///
    /// Uses the quadratic weighting from [`LUMINANCE_WEIGHTS`].
    ///
    /// ```
    /// use pixfx_core::Rgb;
    ///
    /// assert!((Rgb::WHITE.luminance() - 255.0).abs() < 1e-9);
    /// assert_eq!(Rgb::BLACK.luminance(), 0.0);
    /// ```
    #[inline]
    pub fn luminance(self) -> f64 {
        let [r, g, b] = self.to_f64_array();
        let [wr, wg, wb] = LUMINANCE_WEIGHTS;
        (wr * r * r + wg * g * g + wb * b * b).sqrt()
    }

    /// Converts to HSL.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(px: Rgb) -> Self {
        px.to_array()
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rgb")
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .finish()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}
