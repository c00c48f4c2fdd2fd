//! Texture compositor: base gradient plus seeded speckle pattern.

use skinforge_spec::{PatternSeed, SkinDefinition};

use crate::color::Color;
use crate::raster::PixelBuffer;
use crate::rng::DeterministicRng;

/// Square texture resolution for a synthesis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSize {
    /// 256 x 256
    Small,
    /// 512 x 512
    Medium,
    /// 1024 x 1024
    Large,
    /// Arbitrary side length, clamped to [1, 4096].
    Custom(u32),
}

impl TextureSize {
    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        match self {
            TextureSize::Small => 256,
            TextureSize::Medium => 512,
            TextureSize::Large => 1024,
            TextureSize::Custom(side) => (*side).clamp(1, 4096),
        }
    }
}

impl Default for TextureSize {
    fn default() -> Self {
        TextureSize::Medium
    }
}

/// Speckle density: one speckle per this many pixels of area.
const SPECKLE_AREA: u32 = 4096;

/// Compose the base texture for a skin definition.
///
/// Fills the buffer with a diagonal gradient between the base color and
/// the pattern color (a darkened base when the skin has no pattern color),
/// then overlays seed-placed semi-transparent speckles. All placement
/// derives from the pattern seed; this function never fails.
pub fn compose(def: &SkinDefinition, seed: PatternSeed, size: TextureSize) -> PixelBuffer {
    let side = size.side();
    let base = Color::from_slice(def.base_color);
    let pattern = match def.pattern_color {
        Some(rgb) => Color::from_slice(rgb),
        None => base.scale(0.6).clamp(),
    };

    let mut buffer = PixelBuffer::new(side, side, base);
    buffer.fill_diagonal_gradient(base, pattern);

    let mut rng = DeterministicRng::from_pattern_seed(seed);
    let count = (side * side) / SPECKLE_AREA;
    let max_radius = (side as f64 / 128.0).max(2.0);

    for _ in 0..count {
        // Fixed draw order per speckle keeps the stream stable.
        let cx = rng.gen_f64() * side as f64;
        let cy = rng.gen_f64() * side as f64;
        let radius = 1.0 + rng.gen_f64() * (max_radius - 1.0);
        let alpha = 0.15 + rng.gen_f64() * 0.30;
        let tint = rng.gen_f64() * 0.3;

        let speckle = pattern.lerp(&Color::gray(1.0), tint);
        buffer.draw_disc(cx, cy, radius, Color::rgba(speckle.r, speckle.g, speckle.b, alpha));
    }

    buffer
}
