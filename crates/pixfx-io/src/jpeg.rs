//! JPEG format support.
//!
//! Decoding handles RGB, grayscale (8- and 16-bit) and CMYK baseline or
//! progressive JPEGs, converting to 8-bit RGB. Encoding writes RGB at a
//! configurable quality, [`DEFAULT_QUALITY`] unless told otherwise.
//!
//! JPEG is lossy: a raster written and read back is close to, but not
//! equal to, the original.

use crate::{IoError, IoResult};
use pixfx_core::Raster;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Quality used by [`write`].
pub const DEFAULT_QUALITY: u8 = 90;

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Decodes a JPEG held in memory.
pub fn decode_bytes(bytes: &[u8]) -> IoResult<Raster> {
    decode(bytes)
}

fn decode<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let rgb: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels,
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
        // Big-endian 16-bit luma, keep the high byte
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l| [l[0], l[0], l[0]])
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let k = 1.0 - cmyk[3] as f32 / 255.0;
                let ch = |c: u8| ((1.0 - c as f32 / 255.0) * k * 255.0) as u8;
                [ch(cmyk[0]), ch(cmyk[1]), ch(cmyk[2])]
            })
            .collect(),
    };

    debug!(
        width = info.width,
        height = info.height,
        format = ?info.pixel_format,
        "jpeg decoded"
    );
    Ok(Raster::from_rgb8(info.width as u32, info.height as u32, rgb)?)
}

/// Writes a raster to a JPEG file at [`DEFAULT_QUALITY`].
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    write_with_quality(path, raster, DEFAULT_QUALITY)
}

/// Writes a raster to a JPEG file at the given quality (1-100).
pub fn write_with_quality<P: AsRef<Path>>(path: P, raster: &Raster, quality: u8) -> IoResult<()> {
    let bytes = encode_bytes(raster, quality)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Encodes a raster to JPEG bytes.
///
/// # Errors
///
/// [`IoError::EncodeError`] if a dimension exceeds 65535 (the JPEG limit)
/// or the encoder fails.
pub fn encode_bytes(raster: &Raster, quality: u8) -> IoResult<Vec<u8>> {
    use jpeg_encoder::{ColorType, Encoder};

    let (w, h) = raster.dimensions();
    let width = u16::try_from(w)
        .map_err(|_| IoError::EncodeError(format!("width {w} exceeds JPEG limit")))?;
    let height = u16::try_from(h)
        .map_err(|_| IoError::EncodeError(format!("height {h} exceeds JPEG limit")))?;

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, quality.clamp(1, 100));
    encoder
        .encode(&raster.to_rgb8(), width, height, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    debug!(width = w, height = h, quality, bytes = buffer.len(), "jpeg encoded");
    Ok(buffer)
}
