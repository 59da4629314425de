//! Nearest-neighbor resampling.
//!
//! Overlays used by the filter pipeline rarely match the size of the image
//! they are blended onto. [`Resampler`] maps every coordinate of a target
//! grid into a source grid of different dimensions without interpolation.
//!
//! # Coordinate Mapping
//!
//! ```text
//! map_coordinate(i, target, source) = min(floor(i * source / target), source - 1)
//! ```
//!
//! The result is always a valid source index, whether the source is larger
//! or smaller than the target.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::resize::{map_coordinate, resize_nearest};
//!
//! assert_eq!(map_coordinate(3, 4, 8), 6);
//! assert_eq!(map_coordinate(3, 4, 2), 1);
//!
//! let src = Raster::from_pixels(2, 1, vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
//! let wide = resize_nearest(&src, 4, 1).unwrap();
//! assert_eq!(wide.row(0), &[Rgb::BLACK, Rgb::BLACK, Rgb::WHITE, Rgb::WHITE]);
//! ```

use crate::OpsResult;
use pixfx_core::{Raster, Rgb};
use tracing::{debug, trace};

/// Maps a target index to the nearest source index.
///
/// Computed in 64-bit arithmetic, so no intermediate product overflows.
/// Returns 0 when either extent is zero.
#[inline]
pub fn map_coordinate(index: u32, target_extent: u32, source_extent: u32) -> u32 {
    if target_extent == 0 || source_extent == 0 {
        return 0;
    }
    let scaled = index as u64 * source_extent as u64 / target_extent as u64;
    scaled.min(source_extent as u64 - 1) as u32
}

/// Precomputed coordinate tables from a target grid into a source grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resampler {
    xs: Vec<u32>,
    ys: Vec<u32>,
    source: (u32, u32),
}

impl Resampler {
    /// Builds tables for a `target` grid sampling a `source` grid, both given
    /// as `(width, height)`.
    pub fn new(target: (u32, u32), source: (u32, u32)) -> Self {
        let xs = (0..target.0)
            .map(|x| map_coordinate(x, target.0, source.0))
            .collect();
        let ys = (0..target.1)
            .map(|y| map_coordinate(y, target.1, source.1))
            .collect();
        Self { xs, ys, source }
    }

    /// Builds tables sampling `source` at the resolution of `target`.
    pub fn between(target: &Raster, source: &Raster) -> Self {
        Self::new(target.dimensions(), source.dimensions())
    }

    /// Target dimensions covered by the tables.
    #[inline]
    pub fn target_dimensions(&self) -> (u32, u32) {
        (self.xs.len() as u32, self.ys.len() as u32)
    }

    /// Source dimensions the tables index into.
    #[inline]
    pub fn source_dimensions(&self) -> (u32, u32) {
        self.source
    }

    /// Source column for target column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the target width.
    #[inline]
    pub fn source_x(&self, x: u32) -> u32 {
        self.xs[x as usize]
    }

    /// Source row for target row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the target height.
    #[inline]
    pub fn source_y(&self, y: u32) -> u32 {
        self.ys[y as usize]
    }

    /// Reads the source pixel that target `(x, y)` maps to.
    ///
    /// # Panics
    ///
    /// Panics if `source` does not have the dimensions the resampler was
    /// built for, or if `(x, y)` lies outside the target.
    #[inline]
    pub fn sample(&self, source: &Raster, x: u32, y: u32) -> Rgb {
        assert_eq!(
            source.dimensions(),
            self.source,
            "resampler built for a {}x{} source",
            self.source.0,
            self.source.1
        );
        source.pixel(self.source_x(x), self.source_y(y))
    }
}

/// Scales a raster to `width x height` with nearest-neighbor sampling.
///
/// # Errors
///
/// Returns [`OpsError::InvalidInput`](crate::OpsError::InvalidInput) if
/// either target dimension is zero.
pub fn resize_nearest(src: &Raster, width: u32, height: u32) -> OpsResult<Raster> {
    trace!(
        src_w = src.width(),
        src_h = src.height(),
        dst_w = width,
        dst_h = height,
        "resize::nearest"
    );
    let resampler = Resampler::new((width, height), src.dimensions());
    let dst = Raster::from_fn(width, height, |x, y| resampler.sample(src, x, y))?;
    debug!(width, height, "resize::nearest done");
    Ok(dst)
}

/// Computes dimensions that fit inside a bounding box while preserving the
/// aspect ratio. Neither result is ever zero.
pub fn fit_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).max(1);
    let h = ((src_h as f64 * scale).round() as u32).max(1);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    #[test]
    fn test_map_coordinate_identity() {
        for i in 0..17 {
            assert_eq!(map_coordinate(i, 17, 17), i);
        }
    }

    #[test]
    fn test_map_coordinate_stays_in_bounds() {
        for (target, source) in [(1, 1), (3, 100), (100, 3), (7, 8), (8, 7), (1000, 1)] {
            for i in 0..target {
                let s = map_coordinate(i, target, source);
                assert!(s < source, "{i} in {target} -> {s} in {source}");
            }
        }
    }

    #[test]
    fn test_map_coordinate_monotonic() {
        let mapped: Vec<u32> = (0..50).map(|i| map_coordinate(i, 50, 13)).collect();
        assert!(mapped.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(mapped[0], 0);
        assert_eq!(*mapped.last().unwrap(), 12);
    }

    #[test]
    fn test_map_coordinate_zero_extents() {
        assert_eq!(map_coordinate(5, 0, 10), 0);
        assert_eq!(map_coordinate(5, 10, 0), 0);
    }

    #[test]
    fn test_map_coordinate_large_values() {
        assert_eq!(map_coordinate(u32::MAX - 1, u32::MAX, u32::MAX), u32::MAX - 1);
    }

    #[test]
    fn test_resampler_tables() {
        let r = Resampler::new((4, 2), (8, 1));
        assert_eq!(r.target_dimensions(), (4, 2));
        assert_eq!(r.source_dimensions(), (8, 1));
        assert_eq!(
            (0..4).map(|x| r.source_x(x)).collect::<Vec<_>>(),
            vec![0, 2, 4, 6]
        );
        assert_eq!(r.source_y(0), 0);
        assert_eq!(r.source_y(1), 0);
    }

    #[test]
    #[should_panic(expected = "resampler built for a 4x4 source")]
    fn test_sample_rejects_mismatched_source() {
        let resampler = Resampler::new((2, 2), (4, 4));
        let other = Raster::filled(8, 8, Rgb::WHITE).unwrap();
        let _ = resampler.sample(&other, 0, 0);
    }

    #[test]
    fn test_resize_nearest_downscale() {
        let src = Raster::from_fn(4, 4, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        let dst = resize_nearest(&src, 2, 2).unwrap();
        assert_eq!(dst.pixel(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(dst.pixel(1, 0), Rgb::new(2, 0, 0));
        assert_eq!(dst.pixel(1, 1), Rgb::new(2, 2, 0));
    }

    #[test]
    fn test_resize_nearest_same_size_is_copy() {
        let src = Raster::from_fn(5, 3, |x, y| Rgb::new(x as u8, y as u8, 9)).unwrap();
        assert_eq!(resize_nearest(&src, 5, 3).unwrap(), src);
    }

    #[test]
    fn test_resize_nearest_zero_rejected() {
        let src = Raster::new(2, 2).unwrap();
        assert!(matches!(
            resize_nearest(&src, 0, 3),
            Err(OpsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fit_dimensions() {
        assert_eq!(fit_dimensions(1920, 1080, 960, 960), (960, 540));
        assert_eq!(fit_dimensions(100, 1, 10, 10), (10, 1));
    }
}
