//! Raster buffer type.
//!
//! [`Raster`] is an owned, dense grid of [`Rgb`] pixels with fixed width and
//! height. It is the single data type every pixfx operation consumes and
//! produces.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom:
//!
//! ```text
//! index(x, y) = y * width + x
//!
//! [P(0,0) P(1,0) P(2,0) ...]  <- row 0
//! [P(0,1) P(1,1) P(2,1) ...]  <- row 1
//! ```
//!
//! Coordinates are `(x, y)` = (column in `[0, width)`, row in `[0, height)`).
//!
//! # Dimensions
//!
//! Both dimensions must be non-zero. Every constructor validates this, so an
//! operation that receives a `Raster` never has to deal with an empty grid.
//!
//! # Usage
//!
//! ```rust
//! use pixfx_core::{Raster, Rgb};
//!
//! let mut img = Raster::new(3, 2).unwrap();
//! img.set_pixel(2, 1, Rgb::new(10, 20, 30));
//!
//! assert_eq!(img.dimensions(), (3, 2));
//! assert_eq!(img.pixel(2, 1), Rgb::new(10, 20, 30));
//! assert_eq!(img.get_pixel(3, 0), None);
//! ```

use crate::{Error, Result, Rgb};
use std::fmt;

/// Owned width x height grid of RGB pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    /// Pixel buffer, row-major
    data: Vec<Rgb>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

/// Validates dimensions and returns the pixel count.
fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))
}

impl Raster {
    /// Creates a black raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Creates a raster with every pixel set to `pixel`.
    ///
    /// ```rust
    /// use pixfx_core::{Raster, Rgb};
    ///
    /// let white = Raster::filled(8, 8, Rgb::WHITE).unwrap();
    /// assert!(white.pixels().all(|(_, _, px)| px == Rgb::WHITE));
    /// ```
    pub fn filled(width: u32, height: u32, pixel: Rgb) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            data: vec![pixel; len],
            width,
            height,
        })
    }

    /// Creates a raster from existing row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if a dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        Ok(Self {
            data: pixels,
            width,
            height,
        })
    }

    /// Creates a raster from an interleaved RGB8 byte buffer.
    ///
    /// ```rust
    /// use pixfx_core::{Raster, Rgb};
    ///
    /// let img = Raster::from_rgb8(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
    /// assert_eq!(img.pixel(1, 0), Rgb::new(0, 0, 255));
    /// ```
    pub fn from_rgb8(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if bytes.len() != expected * 3 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected * 3, bytes.len()),
            ));
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a raster by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let len = checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raster dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.offset(x, y)]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.data[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Returns the pixel at (x, y) or an [`Error::OutOfBounds`].
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<Rgb> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgb) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.offset(x, y);
        self.data[offset] = pixel;
    }

    /// Sets the pixel at (x, y) or returns an [`Error::OutOfBounds`].
    pub fn try_set_pixel(&mut self, x: u32, y: u32, pixel: Rgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        self.set_pixel(x, y, pixel);
        Ok(())
    }

    /// Fills the entire raster with a pixel value.
    pub fn fill(&mut self, pixel: Rgb) {
        self.data.fill(pixel);
    }

    /// Returns the row-major pixel slice.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.data
    }

    /// Returns the row-major pixel slice, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Returns a row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterates over all pixels with their coordinates, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, px)| ((i % width as usize) as u32, (i / width as usize) as u32, *px))
    }

    /// Applies a function to each pixel in place.
    ///
    /// ```rust
    /// use pixfx_core::{Raster, Rgb};
    ///
    /// let mut img = Raster::filled(2, 2, Rgb::new(10, 20, 30)).unwrap();
    /// img.map_pixels(|px| Rgb::new(px.b, px.g, px.r));
    /// assert_eq!(img.pixel(1, 1), Rgb::new(30, 20, 10));
    /// ```
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(Rgb) -> Rgb,
    {
        for px in self.data.iter_mut() {
            *px = f(*px);
        }
    }

    /// Returns a new raster with `f` applied to every pixel.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(Rgb) -> Rgb,
    {
        Self {
            data: self.data.iter().copied().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Returns a new raster with `f(x, y, pixel)` applied at every coordinate.
    pub fn map_with_coords<F>(&self, mut f: F) -> Self
    where
        F: FnMut(u32, u32, Rgb) -> Rgb,
    {
        let width = self.width as usize;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, px)| f((i % width) as u32, (i / width) as u32, *px))
            .collect();
        Self {
            data,
            width: self.width,
            height: self.height,
        }
    }

    /// In-place variant of [`Raster::map_with_coords`].
    pub fn map_pixels_with_coords<F>(&mut self, mut f: F)
    where
        F: FnMut(u32, u32, Rgb) -> Rgb,
    {
        let width = self.width as usize;
        for (i, px) in self.data.iter_mut().enumerate() {
            *px = f((i % width) as u32, (i / width) as u32, *px);
        }
    }

    /// Builds a `height x width` raster, evaluating `f(x, y)` in the new
    /// coordinate space.
    ///
    /// Used by quarter-turn rotations, which always swap the dimensions of
    /// an already valid raster.
    ///
    /// ```rust
    /// use pixfx_core::{Raster, Rgb};
    ///
    /// let img = Raster::new(3, 1).unwrap();
    /// let t = img.transposed_from_fn(|_, y| Rgb::gray(y as u8));
    /// assert_eq!(t.dimensions(), (1, 3));
    /// assert_eq!(t.pixel(0, 2), Rgb::gray(2));
    /// ```
    pub fn transposed_from_fn<F>(&self, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let (width, height) = (self.height, self.width);
        let mut data = Vec::with_capacity(self.data.len());
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the pixels as an interleaved RGB8 byte buffer.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            bytes.extend_from_slice(&px.to_array());
        }
        bytes
    }

    /// Consumes the raster and returns its row-major pixels.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.data
    }
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_new() {
        let img = Raster::new(100, 50).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.pixel(99, 49), Rgb::BLACK);
    }

    #[test]
    fn test_raster_zero_dimensions_rejected() {
        assert!(matches!(
            Raster::new(0, 10),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(Raster::new(10, 0).is_err());
        assert!(Raster::from_pixels(0, 0, vec![]).is_err());
    }

    #[test]
    fn test_raster_set_get_pixel() {
        let mut img = Raster::new(10, 10).unwrap();
        img.set_pixel(5, 3, Rgb::new(1, 2, 3));
        assert_eq!(img.pixel(5, 3), Rgb::new(1, 2, 3));
        assert_eq!(img.pixel(3, 5), Rgb::BLACK);
        // row-major: (5, 3) lives at 3 * 10 + 5
        assert_eq!(img.as_slice()[35], Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_raster_checked_access() {
        let mut img = Raster::new(4, 4).unwrap();
        assert!(img.try_pixel(4, 0).unwrap_err().is_bounds_error());
        assert!(img.try_set_pixel(0, 4, Rgb::WHITE).is_err());
        img.try_set_pixel(3, 3, Rgb::WHITE).unwrap();
        assert_eq!(img.try_pixel(3, 3).unwrap(), Rgb::WHITE);
        assert_eq!(img.get_pixel(4, 4), None);
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_raster_pixel_panics_out_of_bounds() {
        let img = Raster::new(2, 2).unwrap();
        let _ = img.pixel(2, 0);
    }

    #[test]
    fn test_raster_from_pixels_wrong_size() {
        let result = Raster::from_pixels(4, 4, vec![Rgb::BLACK; 15]);
        assert!(result.is_err());
    }

    #[test]
    fn test_raster_rgb8_roundtrip() {
        let bytes: Vec<u8> = (0..2 * 3 * 3).map(|i| i as u8).collect();
        let img = Raster::from_rgb8(2, 3, bytes.clone()).unwrap();
        assert_eq!(img.pixel(1, 0), Rgb::new(3, 4, 5));
        assert_eq!(img.to_rgb8(), bytes);
        assert!(Raster::from_rgb8(2, 3, vec![0; 17]).is_err());
    }

    #[test]
    fn test_raster_from_fn_and_pixels_iter() {
        let img = Raster::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        let coords: Vec<(u32, u32)> = img.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        for (x, y, px) in img.pixels() {
            assert_eq!(px, Rgb::new(x as u8, y as u8, 0));
        }
        assert_eq!(img.row(1), &[Rgb::new(0, 1, 0), Rgb::new(1, 1, 0), Rgb::new(2, 1, 0)]);
    }

    #[test]
    fn test_raster_map_leaves_source_untouched() {
        let src = Raster::filled(2, 2, Rgb::gray(10)).unwrap();
        let dst = src.map(|px| Rgb::gray(px.r + 1));
        assert_eq!(src.pixel(0, 0), Rgb::gray(10));
        assert_eq!(dst.pixel(0, 0), Rgb::gray(11));
    }

    #[test]
    fn test_raster_fill() {
        let mut img = Raster::new(3, 3).unwrap();
        img.fill(Rgb::WHITE);
        assert!(img.pixels().all(|(_, _, px)| px == Rgb::WHITE));
    }

    #[test]
    fn test_raster_map_with_coords() {
        let src = Raster::new(3, 2).unwrap();
        let dst = src.map_with_coords(|x, y, _| Rgb::new(x as u8, y as u8, 7));
        assert_eq!(dst.pixel(2, 1), Rgb::new(2, 1, 7));

        let mut owned = src.clone();
        owned.map_pixels_with_coords(|x, y, _| Rgb::new(x as u8, y as u8, 7));
        assert_eq!(owned, dst);
    }

    #[test]
    fn test_raster_transposed_from_fn() {
        let src = Raster::new(4, 2).unwrap();
        let t = src.transposed_from_fn(|x, y| Rgb::new(x as u8, y as u8, 0));
        assert_eq!(t.dimensions(), (2, 4));
        assert_eq!(t.pixel(1, 3), Rgb::new(1, 3, 0));
    }
}
