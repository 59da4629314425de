//! Per-pixel color operations: grayscale, invert, sepia.
//!
//! Every function borrows its input and returns a new [`Raster`] of the same
//! dimensions. The `*_in_place` variants rewrite an owned raster instead.
//!
//! # Formulas
//!
//! ```text
//! grayscale:  v = floor((r + g + b) / 3)       -> (v, v, v)
//! invert:     c' = 255 - c
//! sepia:      r' = 0.393r + 0.769g + 0.189b
//!             g' = 0.349r + 0.686g + 0.168b
//!             b' = 0.272r + 0.534g + 0.131b    (truncated, clamped to 255)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::color::{grayscale, invert};
//!
//! let img = Raster::from_pixels(2, 1, vec![Rgb::new(255, 0, 0), Rgb::WHITE]).unwrap();
//!
//! let gray = grayscale(&img);
//! assert_eq!(gray.pixel(0, 0), Rgb::gray(85));
//!
//! assert_eq!(invert(&invert(&img)), img);
//! ```

use pixfx_core::{Raster, Rgb};
use tracing::trace;

/// Sepia tone matrix, rows produce R, G, B.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Grayscale value of a single pixel: truncated mean of the channels.
#[inline]
pub fn grayscale_pixel(px: Rgb) -> Rgb {
    let sum = px.r as u16 + px.g as u16 + px.b as u16;
    Rgb::gray((sum / 3) as u8)
}

/// Channel-wise complement of a single pixel.
#[inline]
pub fn invert_pixel(px: Rgb) -> Rgb {
    Rgb::new(255 - px.r, 255 - px.g, 255 - px.b)
}

/// Sepia tone of a single pixel.
#[inline]
pub fn sepia_pixel(px: Rgb) -> Rgb {
    let rgb = px.to_f64_array();
    let row = |m: [f64; 3]| m[0] * rgb[0] + m[1] * rgb[1] + m[2] * rgb[2];
    Rgb::from_f64_truncated(
        row(SEPIA_MATRIX[0]),
        row(SEPIA_MATRIX[1]),
        row(SEPIA_MATRIX[2]),
    )
}

/// Converts to grayscale by averaging the three channels.
pub fn grayscale(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "color::grayscale");
    src.map(grayscale_pixel)
}

/// In-place variant of [`grayscale`].
pub fn grayscale_in_place(img: &mut Raster) {
    trace!(width = img.width(), height = img.height(), "color::grayscale_in_place");
    img.map_pixels(grayscale_pixel);
}

/// Inverts every channel (`255 - c`).
pub fn invert(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "color::invert");
    src.map(invert_pixel)
}

/// In-place variant of [`invert`].
pub fn invert_in_place(img: &mut Raster) {
    trace!(width = img.width(), height = img.height(), "color::invert_in_place");
    img.map_pixels(invert_pixel);
}

/// Applies the sepia tone matrix.
///
/// Always allocates: the input raster is left untouched.
pub fn sepia(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "color::sepia");
    src.map(sepia_pixel)
}

/// In-place variant of [`sepia`].
pub fn sepia_in_place(img: &mut Raster) {
    trace!(width = img.width(), height = img.height(), "color::sepia_in_place");
    img.map_pixels(sepia_pixel);
}
