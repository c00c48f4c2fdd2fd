//! Alpha-channel wear mask extraction.
//!
//! Some externally authored base textures carry their wear mask in the
//! alpha channel. The decision is made once per texture load and is
//! strictly binary: either the alpha channel is the wear mask (and the
//! procedural overlay never runs for that texture), or the texture is
//! fully opaque and the procedural path runs. The two paths never both
//! run and never both get skipped.

use crate::png_io;
use crate::raster::{GrayBuffer, PixelBuffer};

/// Where the wear mask for a loaded base texture comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WearMaskSource {
    /// No authored mask; wear is generated procedurally.
    Procedural,
    /// The texture's alpha channel, extracted as a grayscale mask.
    AlphaChannel(GrayBuffer),
}

impl WearMaskSource {
    /// Inspect an externally supplied base texture once at load time.
    ///
    /// Any pixel with alpha below 255 marks the alpha channel as an
    /// authored wear mask (the strict any-pixel rule). A texture that
    /// fails to decode falls back to the procedural path; a broken
    /// preview asset must never surface as an error.
    pub fn detect(png_bytes: &[u8]) -> Self {
        match png_io::decode_rgba(png_bytes) {
            Ok(buffer) => match extract_alpha_mask(&buffer) {
                Some(mask) => WearMaskSource::AlphaChannel(mask),
                None => WearMaskSource::Procedural,
            },
            Err(_) => WearMaskSource::Procedural,
        }
    }

    /// Whether an authored alpha mask was found.
    pub fn is_alpha(&self) -> bool {
        matches!(self, WearMaskSource::AlphaChannel(_))
    }
}

/// Extract the alpha channel as a wear mask.
///
/// Returns `None` when every pixel is fully opaque (alpha = 255), i.e.
/// the texture carries no authored mask.
pub fn extract_alpha_mask(buffer: &PixelBuffer) -> Option<GrayBuffer> {
    let bytes = buffer.as_bytes();
    let any_translucent = bytes.chunks_exact(4).any(|px| px[3] < 255);
    if !any_translucent {
        return None;
    }

    let mut mask = GrayBuffer::new(buffer.width, buffer.height, 255);
    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let idx = ((y * buffer.width + x) * 4 + 3) as usize;
            mask.set(x, y, bytes[idx]);
        }
    }
    Some(mask)
}

/// Apply an authored wear mask to a composed base buffer.
///
/// Stands in for the roughness-map application on the preview: pixels
/// with lower mask alpha darken proportionally, down to 50% at alpha 0.
/// The mask is resampled by nearest neighbor when its dimensions differ
/// from the buffer's. Alpha in the output stays fully opaque.
pub fn apply_mask(base: &PixelBuffer, mask: &GrayBuffer) -> PixelBuffer {
    let mut out = base.clone();
    for y in 0..base.height {
        for x in 0..base.width {
            let mx = (x as u64 * mask.width as u64 / base.width as u64) as u32;
            let my = (y as u64 * mask.height as u64 / base.height as u64) as u32;
            let alpha = mask.get(mx.min(mask.width - 1), my.min(mask.height - 1));

            let factor = 0.5 + 0.5 * (alpha as f64 / 255.0);
            let mut c = base.get(x, y).scale(factor);
            c.a = 1.0;
            out.set(x, y, c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::png_io::{write_rgba_to_vec_with_hash, PngConfig};
    use pretty_assertions::assert_eq;

    fn opaque_texture() -> PixelBuffer {
        PixelBuffer::new(8, 8, Color::rgb(0.3, 0.5, 0.7))
    }

    fn masked_texture() -> PixelBuffer {
        let mut buffer = opaque_texture();
        buffer.set(2, 3, Color::rgba(0.3, 0.5, 0.7, 0.25));
        buffer
    }

    #[test]
    fn fully_opaque_has_no_mask() {
        assert_eq!(extract_alpha_mask(&opaque_texture()), None);
    }

    #[test]
    fn single_translucent_pixel_triggers_mask() {
        let mask = extract_alpha_mask(&masked_texture()).unwrap();
        assert_eq!(mask.get(2, 3), 64);
        assert_eq!(mask.get(0, 0), 255);
    }

    #[test]
    fn detect_on_encoded_textures() {
        let config = PngConfig::default();

        let (opaque, _) = write_rgba_to_vec_with_hash(&opaque_texture(), &config).unwrap();
        assert_eq!(WearMaskSource::detect(&opaque), WearMaskSource::Procedural);

        let (masked, _) = write_rgba_to_vec_with_hash(&masked_texture(), &config).unwrap();
        assert!(WearMaskSource::detect(&masked).is_alpha());
    }

    #[test]
    fn decode_failure_falls_back_to_procedural() {
        let source = WearMaskSource::detect(b"corrupt bytes");
        assert_eq!(source, WearMaskSource::Procedural);
    }

    #[test]
    fn apply_mask_darkens_masked_pixels_only() {
        let base = PixelBuffer::new(8, 8, Color::gray(0.8));
        let mut mask = GrayBuffer::new(8, 8, 255);
        mask.set(1, 1, 0);

        let out = apply_mask(&base, &mask);
        let untouched = out.get(0, 0).to_rgba8();
        let worn = out.get(1, 1).to_rgba8();

        assert_eq!(untouched, base.get(0, 0).to_rgba8());
        assert!(worn[0] < untouched[0]);
        assert_eq!(worn[3], 255);
    }

    #[test]
    fn apply_mask_resamples_mismatched_dimensions() {
        let base = PixelBuffer::new(8, 8, Color::gray(0.8));
        // 4x4 mask, fully worn lower-right quadrant.
        let mut mask = GrayBuffer::new(4, 4, 255);
        mask.set(3, 3, 0);

        let out = apply_mask(&base, &mask);
        assert!(out.get(7, 7).to_rgba8()[0] < out.get(0, 0).to_rgba8()[0]);
    }

    #[test]
    fn apply_mask_does_not_mutate_input() {
        let base = masked_texture();
        let snapshot = base.clone();
        let mask = GrayBuffer::new(8, 8, 128);
        let _ = apply_mask(&base, &mask);
        assert_eq!(base, snapshot);
    }
}
