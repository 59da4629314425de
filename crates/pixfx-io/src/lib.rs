//! # pixfx-io
//!
//! Decode and encode collaborators for pixfx.
//!
//! The operations in `pixfx-ops` never touch storage. This crate turns files
//! into [`Raster`]s and back:
//!
//! - **PNG** - lossless, the default output format
//! - **JPEG** - lossy, quality 90 on write
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pixfx_io::{read, read_overlay, write};
//!
//! let image = read("photo.jpg")?;
//! let halo = read_overlay("resources/halo.png")?;
//! write("photo.png", &image)?;
//! # let _ = halo;
//! # Ok::<(), pixfx_io::IoError>(())
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths |
//! |--------|------|-------|------------|
//! | PNG | Yes | Yes | 1-16 read, 8 write |
//! | JPEG | Yes | Yes | 8 |
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::Format;
pub use error::{IoError, IoResult};

use pixfx_core::Raster;
use std::path::Path;
use tracing::{debug, trace};

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Reads an image from a file, auto-detecting the format.
///
/// # Errors
///
/// - [`IoError::InvalidFile`] if `path` is not an existing regular file
/// - [`IoError::UnsupportedFormat`] if the format is not recognized or its
///   feature is disabled
/// - [`IoError::DecodeError`] and friends from the decoder
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    trace!(path = %path.display(), "io::read");
    if !path.is_file() {
        return Err(IoError::InvalidFile(format!(
            "path does not point to an image: {}",
            path.display()
        )));
    }

    let format = Format::detect(path)?;
    let raster = match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path)?,

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path)?,

        #[allow(unreachable_patterns)]
        _ => return Err(IoError::UnsupportedFormat(extension_of(path))),
    };

    debug!(
        path = %path.display(),
        ?format,
        width = raster.width(),
        height = raster.height(),
        "image read"
    );
    Ok(raster)
}

/// Reads an auxiliary overlay image (halo, grain).
///
/// Behaves like [`read`] but reports every failure as
/// [`IoError::ResourceUnavailable`] naming the overlay path.
pub fn read_overlay<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    read(path).map_err(|e| IoError::resource_unavailable(path, e))
}

/// Writes a raster to a file, choosing the format by extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for an unknown extension or a disabled
/// format feature; otherwise encoder and filesystem errors.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    trace!(path = %path.display(), ?format, "io::write");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, raster)?,

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::write(path, raster)?,

        #[allow(unreachable_patterns)]
        _ => return Err(IoError::UnsupportedFormat(extension_of(path))),
    }

    debug!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "image written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;

    #[test]
    fn test_read_missing_file() {
        let err = read("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, IoError::InvalidFile(_)));
        assert!(err.to_string().contains("does not point to an image"));
    }

    #[test]
    fn test_read_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read(dir.path()), Err(IoError::InvalidFile(_))));
    }

    #[test]
    fn test_overlay_errors_are_resource_unavailable() {
        let err = read_overlay("/definitely/not/halo.png").unwrap_err();
        assert!(err.is_resource_unavailable());
        assert!(err.to_string().contains("halo.png"));
    }

    #[test]
    fn test_write_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let raster = Raster::new(2, 2).unwrap();
        let err = write(dir.path().join("out.bmp"), &raster).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(ref e) if e == "bmp"));
    }

    #[test]
    fn test_read_unknown_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();
        assert!(matches!(read(&path), Err(IoError::UnsupportedFormat(_))));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_png_dispatch_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        let raster = Raster::filled(3, 2, Rgb::new(1, 2, 3)).unwrap();
        write(&path, &raster).unwrap();
        assert_eq!(read(&path).unwrap(), raster);
        assert_eq!(read_overlay(&path).unwrap(), raster);
    }
}
