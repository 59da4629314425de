//! Black/white stylization at the median luminance.
//!
//! Each pixel's luminance is `sqrt(0.299 r² + 0.587 g² + 0.114 b²)`
//! (see [`Rgb::luminance`]). The threshold is the median of all luminances:
//! the middle element for an odd pixel count, the mean of the two central
//! elements for an even count. Pixels at or above the median turn white,
//! the rest black. A uniform image therefore becomes entirely white.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//! use pixfx_ops::threshold::{black_white_threshold, median_luminance};
//!
//! let img = Raster::from_pixels(
//!     3,
//!     1,
//!     vec![Rgb::gray(10), Rgb::gray(200), Rgb::gray(90)],
//! )
//! .unwrap();
//!
//! assert!((median_luminance(&img) - 90.0).abs() < 1e-9);
//!
//! let bw = black_white_threshold(&img);
//! assert_eq!(bw.row(0), &[Rgb::BLACK, Rgb::WHITE, Rgb::WHITE]);
//! ```

use pixfx_core::{Raster, Rgb};
use tracing::{debug, trace};

/// Median of a set of values, sorted with a total order.
///
/// Returns `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(f64::total_cmp);
    let n = values.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Median luminance over every pixel of the raster.
pub fn median_luminance(src: &Raster) -> f64 {
    let mut lum: Vec<f64> = src.as_slice().iter().map(|px| px.luminance()).collect();
    // A Raster always holds at least one pixel.
    median(&mut lum).unwrap_or(0.0)
}

#[inline]
fn classify(px: Rgb, threshold: f64) -> Rgb {
    if px.luminance() >= threshold {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

/// Maps every pixel to pure white or pure black around the median luminance.
pub fn black_white_threshold(src: &Raster) -> Raster {
    trace!(width = src.width(), height = src.height(), "threshold::black_white");
    let threshold = median_luminance(src);
    debug!(median = threshold, "threshold::black_white median");
    src.map(|px| classify(px, threshold))
}

/// In-place variant of [`black_white_threshold`].
pub fn black_white_threshold_in_place(img: &mut Raster) {
    trace!(width = img.width(), height = img.height(), "threshold::black_white_in_place");
    let threshold = median_luminance(img);
    debug!(median = threshold, "threshold::black_white median");
    img.map_pixels(|px| classify(px, threshold));
}
