//! Deterministic PNG encode/decode.
//!
//! Synthesis itself performs no I/O; this module is the caller-facing
//! surface for turning a pixel buffer into a raster file (and for the
//! one-time decode of an externally supplied base texture). Fixed
//! compression settings keep encoded files byte-identical for the same
//! input data, so content-addressed screenshot caching works on the file
//! level too.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::raster::{GrayBuffer, PixelBuffer};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("unsupported PNG layout: {0}")]
    UnsupportedLayout(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Fixed for determinism.
    pub compression: Compression,
    /// Filter type. `NoFilter` for maximum determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA pixel buffer to a PNG file.
pub fn write_rgba(buffer: &PixelBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(buffer, writer, config)
}

/// Write an RGBA pixel buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(buffer.as_bytes())?;
    Ok(())
}

/// Write an RGBA pixel buffer to a Vec and return the BLAKE3 hash of the
/// encoded file.
pub fn write_rgba_to_vec_with_hash(
    buffer: &PixelBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Write a grayscale mask buffer to a PNG file.
pub fn write_gray(buffer: &GrayBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_gray_to_writer(buffer, writer, config)
}

/// Write a grayscale mask buffer to any writer.
pub fn write_gray_to_writer<W: Write>(
    buffer: &GrayBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(buffer.as_bytes())?;
    Ok(())
}

/// Compute the BLAKE3 hash of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Decode PNG bytes into an RGBA8 pixel buffer.
///
/// Palette and sub-byte grayscale images are expanded, 16-bit channels are
/// truncated to 8, and missing alpha channels are filled with 255.
pub fn decode_rgba(bytes: &[u8]) -> Result<PixelBuffer, PngError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut raw = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut raw)?;
    raw.truncate(info.buffer_size());

    let (width, height) = (info.width, info.height);
    let pixel_count = (width as usize) * (height as usize);

    let rgba = match info.color_type {
        ColorType::Rgba => raw,
        ColorType::Rgb => {
            let mut out = Vec::with_capacity(pixel_count * 4);
            for px in raw.chunks_exact(3) {
                out.extend_from_slice(px);
                out.push(255);
            }
            out
        }
        ColorType::Grayscale => {
            let mut out = Vec::with_capacity(pixel_count * 4);
            for &v in &raw {
                out.extend_from_slice(&[v, v, v, 255]);
            }
            out
        }
        ColorType::GrayscaleAlpha => {
            let mut out = Vec::with_capacity(pixel_count * 4);
            for px in raw.chunks_exact(2) {
                out.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
            out
        }
        ColorType::Indexed => {
            // EXPAND converts indexed to RGB; reaching here means it did not.
            return Err(PngError::UnsupportedLayout(
                "indexed color was not expanded".to_string(),
            ));
        }
    };

    PixelBuffer::from_rgba_bytes(width, height, rgba).ok_or_else(|| {
        PngError::UnsupportedLayout(format!(
            "decoded byte count does not match {}x{} RGBA",
            width, height
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use pretty_assertions::assert_eq;

    fn gradient_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(32, 32, Color::gray(0.0));
        buffer.fill_diagonal_gradient(Color::rgb(0.1, 0.2, 0.3), Color::rgb(0.9, 0.8, 0.7));
        buffer
    }

    #[test]
    fn rgba_encoding_is_deterministic() {
        let buffer = gradient_buffer();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();

        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn encode_decode_round_trip() {
        let buffer = gradient_buffer();
        let (data, _) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();

        let decoded = decode_rgba(&data).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_rgba(b"definitely not a png").is_err());
        assert!(decode_rgba(&[]).is_err());
    }

    #[test]
    fn gray_encoding_is_deterministic() {
        let mut mask = GrayBuffer::new(16, 16, 0);
        for y in 0..16 {
            for x in 0..16 {
                mask.set(x, y, ((x + y) * 8) as u8);
            }
        }

        let mut a = Vec::new();
        let mut b = Vec::new();
        write_gray_to_writer(&mask, &mut a, &PngConfig::default()).unwrap();
        write_gray_to_writer(&mask, &mut b, &PngConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn write_rgba_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_rgba(&gradient_buffer(), &path, &PngConfig::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(decode_rgba(&bytes).unwrap(), gradient_buffer());
    }
}
