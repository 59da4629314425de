//! Format detection utilities.
//!
//! Detects image formats from magic bytes, falling back to the file
//! extension.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path (magic bytes, then extension).
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            _ => Format::Unknown,
        }
    }

    /// Detects format from the first bytes of a file.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 8];
        let n = file.read(&mut header)?;
        Ok(Self::from_bytes(&header[..n]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.starts_with(&PNG_MAGIC) {
            Format::Png
        } else if bytes.starts_with(&JPEG_MAGIC) {
            Format::Jpeg
        } else {
            Format::Unknown
        }
    }

    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpg",
            Format::Unknown => "",
        }
    }

    /// Returns `true` if the format stores pixels without loss.
    pub fn is_lossless(&self) -> bool {
        matches!(self, Format::Png)
    }
}
