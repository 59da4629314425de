//! Geometric transforms: quarter-turn rotations.
//!
//! # Operations
//!
//! - [`rotate_cw`] - 90 degrees clockwise
//! - [`rotate_ccw`] - 90 degrees counter-clockwise
//! - [`rotate_180`] - half turn
//! - [`rotate_cw_times`] - `n` clockwise quarter turns
//!
//! Quarter turns swap width and height, so they always allocate.
//!
//! # Mapping
//!
//! For an input of width `W` and height `H`, clockwise rotation moves the
//! input pixel at `(x, y)` to `(H - 1 - y, x)` in the `H x W` output. The
//! top input row becomes the rightmost output column.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::transform::rotate_cw;
//!
//! let a = Rgb::new(255, 0, 0);
//! let b = Rgb::new(0, 0, 255);
//! let img = Raster::from_pixels(2, 1, vec![a, b]).unwrap();
//!
//! let rotated = rotate_cw(&img);
//! assert_eq!(rotated.dimensions(), (1, 2));
//! assert_eq!(rotated.pixel(0, 0), a);
//! assert_eq!(rotated.pixel(0, 1), b);
//! ```

use pixfx_core::Raster;
use tracing::trace;

/// Rotates 90 degrees clockwise.
///
/// Returns a new `height x width` raster; the input is not modified.
pub fn rotate_cw(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "transform::rotate_cw");
    let h = src.height();
    // out(nx, ny) = in(ny, H - 1 - nx)
    src.transposed_from_fn(|nx, ny| src.pixel(ny, h - 1 - nx))
}

/// Rotates 90 degrees counter-clockwise.
pub fn rotate_ccw(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "transform::rotate_ccw");
    let w = src.width();
    src.transposed_from_fn(|nx, ny| src.pixel(w - 1 - ny, nx))
}

/// Rotates 180 degrees.
pub fn rotate_180(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "transform::rotate_180");
    let (w, h) = src.dimensions();
    src.map_with_coords(|x, y, _| src.pixel(w - 1 - x, h - 1 - y))
}

/// Applies `times` clockwise quarter turns.
///
/// Only `times % 4` matters; a multiple of four returns an unchanged copy.
pub fn rotate_cw_times(src: &Raster, times: u32) -> Raster {
    match times % 4 {
        0 => src.clone(),
        1 => rotate_cw(src),
        2 => rotate_180(src),
        _ => rotate_ccw(src),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;

    fn numbered(w: u32, h: u32) -> Raster {
        Raster::from_fn(w, h, |x, y| Rgb::new(x as u8, y as u8, (x + y * w) as u8)).unwrap()
    }

    #[test]
    fn test_rotate_cw_mapping() {
        let src = numbered(3, 2);
        let dst = rotate_cw(&src);
        assert_eq!(dst.dimensions(), (2, 3));
        for (x, y, px) in src.pixels() {
            assert_eq!(dst.pixel(2 - 1 - y, x), px);
        }
    }

    #[test]
    fn test_rotate_cw_row_to_column() {
        let a = Rgb::new(1, 2, 3);
        let b = Rgb::new(4, 5, 6);
        let src = Raster::from_pixels(2, 1, vec![a, b]).unwrap();
        let dst = rotate_cw(&src);
        assert_eq!(dst.dimensions(), (1, 2));
        assert_eq!(dst.as_slice(), &[a, b]);
    }

    #[test]
    fn test_rotate_cw_2x2() {
        // 2x2: [A B / C D] -> [C A / D B]
        let src = numbered(2, 2);
        let dst = rotate_cw(&src);
        assert_eq!(dst.pixel(0, 0), src.pixel(0, 1));
        assert_eq!(dst.pixel(1, 0), src.pixel(0, 0));
        assert_eq!(dst.pixel(0, 1), src.pixel(1, 1));
        assert_eq!(dst.pixel(1, 1), src.pixel(1, 0));
    }

    #[test]
    fn test_four_turns_is_identity() {
        let src = numbered(5, 3);
        let once = rotate_cw(&src);
        let twice = rotate_cw(&once);
        let thrice = rotate_cw(&twice);
        assert_eq!(rotate_cw(&thrice), src);
        assert_eq!(rotate_cw_times(&src, 4), src);
    }

    #[test]
    fn test_ccw_undoes_cw() {
        let src = numbered(4, 7);
        assert_eq!(rotate_ccw(&rotate_cw(&src)), src);
        assert_eq!(rotate_cw_times(&src, 3), rotate_ccw(&src));
    }

    #[test]
    fn test_rotate_180_matches_two_quarter_turns() {
        let src = numbered(6, 3);
        assert_eq!(rotate_180(&src), rotate_cw(&rotate_cw(&src)));
        assert_eq!(rotate_cw_times(&src, 2), rotate_180(&src));
    }

    #[test]
    fn test_input_untouched() {
        let src = numbered(3, 3);
        let copy = src.clone();
        let _ = rotate_cw(&src);
        assert_eq!(src, copy);
    }
}
