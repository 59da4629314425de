//! PNG format support.
//!
//! Reading accepts 8- and 16-bit grayscale, gray+alpha, RGB and RGBA, plus
//! palette and low-bit-depth images (expanded by the decoder). Everything is
//! reduced to 8-bit RGB:
//!
//! - alpha is dropped
//! - gray is replicated to all three channels
//! - 16-bit samples keep their high byte
//!
//! Writing always produces 8-bit RGB, which stores a [`Raster`] losslessly.
//!
//! # Example
//!
//! ```rust,no_run
//! use pixfx_io::png;
//!
//! let raster = png::read("input.png")?;
//! png::write("output.png", &raster)?;
//! # Ok::<(), pixfx_io::IoError>(())
//! ```

use crate::{IoError, IoResult};
use pixfx_core::Raster;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;
use tracing::debug;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Decodes a PNG held in memory.
pub fn decode_bytes(bytes: &[u8]) -> IoResult<Raster> {
    decode(Cursor::new(bytes))
}

fn decode<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let rgb = to_rgb8(&buf[..info.buffer_size()], info.color_type, info.bit_depth)?;
    debug!(
        width = info.width,
        height = info.height,
        color = ?info.color_type,
        depth = ?info.bit_depth,
        "png decoded"
    );
    Ok(Raster::from_rgb8(info.width, info.height, rgb)?)
}

/// Reduces decoded samples to interleaved 8-bit RGB.
fn to_rgb8(buf: &[u8], color: png::ColorType, depth: png::BitDepth) -> IoResult<Vec<u8>> {
    let channels = match color {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(IoError::UnsupportedBitDepth(format!("{color:?} {depth:?}")));
        }
    };
    let bytes_per_sample = match depth {
        png::BitDepth::Eight => 1,
        png::BitDepth::Sixteen => 2,
        _ => return Err(IoError::UnsupportedBitDepth(format!("{color:?} {depth:?}"))),
    };

    let stride = channels * bytes_per_sample;
    let mut rgb = Vec::with_capacity(buf.len() / stride * 3);
    for px in buf.chunks_exact(stride) {
        // Big-endian: the first byte of a 16-bit sample is the high byte.
        let sample = |i: usize| px[i * bytes_per_sample];
        if channels < 3 {
            let g = sample(0);
            rgb.extend_from_slice(&[g, g, g]);
        } else {
            rgb.extend_from_slice(&[sample(0), sample(1), sample(2)]);
        }
    }
    Ok(rgb)
}

/// Writes a raster to a PNG file as 8-bit RGB.
pub fn write<P: AsRef<Path>>(path: P, raster: &Raster) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    encode(BufWriter::new(file), raster)
}

/// Encodes a raster to PNG bytes.
pub fn encode_bytes(raster: &Raster) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    encode(&mut out, raster)?;
    Ok(out)
}

fn encode<W: Write>(writer: W, raster: &Raster) -> IoResult<()> {
    let mut encoder = png::Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(&raster.to_rgb8())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    debug!(width = raster.width(), height = raster.height(), "png encoded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfx_core::Rgb;

    fn encode_raw(
        width: u32,
        height: u32,
        color: png::ColorType,
        depth: png::BitDepth,
        data: &[u8],
    ) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        out
    }

    #[test]
    fn test_roundtrip_rgb() {
        let raster =
            Raster::from_fn(32, 16, |x, y| Rgb::new((x * 8) as u8, (y * 16) as u8, 128)).unwrap();
        let bytes = encode_bytes(&raster).unwrap();
        assert_eq!(decode_bytes(&bytes).unwrap(), raster);
    }

    #[test]
    fn test_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");
        let raster = Raster::from_fn(5, 7, |x, y| Rgb::new(x as u8, y as u8, 200)).unwrap();
        write(&path, &raster).unwrap();
        assert_eq!(read(&path).unwrap(), raster);
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let data = [255, 0, 0, 10, 0, 0, 255, 255];
        let bytes = encode_raw(2, 1, png::ColorType::Rgba, png::BitDepth::Eight, &data);
        let raster = decode_bytes(&bytes).unwrap();
        assert_eq!(raster.row(0), &[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);
    }

    #[test]
    fn test_gray_replicated() {
        let data = [0, 77, 255];
        let bytes = encode_raw(3, 1, png::ColorType::Grayscale, png::BitDepth::Eight, &data);
        let raster = decode_bytes(&bytes).unwrap();
        assert_eq!(raster.row(0), &[Rgb::gray(0), Rgb::gray(77), Rgb::gray(255)]);
    }

    #[test]
    fn test_sixteen_bit_keeps_high_byte() {
        // One RGB16 pixel: 0x1234, 0xABCD, 0xFF00
        let data = [0x12, 0x34, 0xAB, 0xCD, 0xFF, 0x00];
        let bytes = encode_raw(1, 1, png::ColorType::Rgb, png::BitDepth::Sixteen, &data);
        let raster = decode_bytes(&bytes).unwrap();
        assert_eq!(raster.pixel(0, 0), Rgb::new(0x12, 0xAB, 0xFF));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_bytes(b"definitely not a png").unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
