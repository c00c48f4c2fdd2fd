//! Procedural wear overlay engine.
//!
//! Applies layered scratch/scuff/rust effects onto a composed base buffer.
//! The layer order is fixed and part of the determinism contract: layers
//! composite additively over the state left by the previous layer, so
//! reordering changes the final bytes.

use skinforge_spec::{
    PatternSeed, WearSample, FACTORY_NEW_MAX, FIELD_TESTED_MAX, MINIMAL_WEAR_MAX, WELL_WORN_MAX,
};

use crate::color::Color;
use crate::raster::PixelBuffer;
use crate::rng::DeterministicRng;

/// Rust blotch color.
const RUST: Color = Color::rgb(0.45, 0.27, 0.12);

/// One procedural wear layer, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    /// Fine scratch lines, active above the Factory New band.
    Scratches,
    /// Scuff dots, active above Minimal Wear.
    Scuffs,
    /// Heavier, more opaque scratches, active above Field-Tested.
    HeavyScratches,
    /// Rust-colored blotches, active above Well-Worn.
    RustBlotches,
}

impl OverlayLayer {
    /// All layers in application order.
    pub fn all() -> [OverlayLayer; 4] {
        [
            OverlayLayer::Scratches,
            OverlayLayer::Scuffs,
            OverlayLayer::HeavyScratches,
            OverlayLayer::RustBlotches,
        ]
    }

    /// Wear intensity above which this layer activates.
    pub fn threshold(&self) -> f64 {
        match self {
            OverlayLayer::Scratches => FACTORY_NEW_MAX,
            OverlayLayer::Scuffs => MINIMAL_WEAR_MAX,
            OverlayLayer::HeavyScratches => FIELD_TESTED_MAX,
            OverlayLayer::RustBlotches => WELL_WORN_MAX,
        }
    }

    /// Whether this layer is active for the given wear sample.
    pub fn is_active(&self, sample: &WearSample) -> bool {
        sample.intensity > self.threshold()
    }

    /// Number of elements this layer draws at the given intensity.
    ///
    /// Counts use `floor`, not rounding; this is a reproducibility
    /// requirement shared with every other consumer of the wear float.
    pub fn count(&self, intensity: f64) -> usize {
        let multiplier = match self {
            OverlayLayer::Scratches => 50.0,
            OverlayLayer::Scuffs => 30.0,
            OverlayLayer::HeavyScratches => 20.0,
            OverlayLayer::RustBlotches => 40.0,
        };
        (intensity * multiplier).floor() as usize
    }

    /// Stable index used for layer seed derivation.
    fn index(&self) -> u32 {
        match self {
            OverlayLayer::Scratches => 0,
            OverlayLayer::Scuffs => 1,
            OverlayLayer::HeavyScratches => 2,
            OverlayLayer::RustBlotches => 3,
        }
    }
}

/// The layers active for a wear sample, in application order.
pub fn active_layers(sample: &WearSample) -> Vec<OverlayLayer> {
    OverlayLayer::all()
        .into_iter()
        .filter(|layer| layer.is_active(sample))
        .collect()
}

/// Apply procedural wear onto a copy of the base buffer.
///
/// The caller's buffer is untouched; see [`apply_wear_in_place`] for the
/// explicit mutating variant.
pub fn apply_wear(base: &PixelBuffer, sample: &WearSample, seed: PatternSeed) -> PixelBuffer {
    let mut buffer = base.clone();
    apply_wear_in_place(&mut buffer, sample, seed);
    buffer
}

/// Apply procedural wear directly onto the buffer.
pub fn apply_wear_in_place(buffer: &mut PixelBuffer, sample: &WearSample, seed: PatternSeed) {
    for layer in active_layers(sample) {
        let layer_seed = DeterministicRng::derive_layer_seed(seed.value(), layer.index());
        let mut rng = DeterministicRng::new(layer_seed);
        match layer {
            OverlayLayer::Scratches => scratches(buffer, sample, &mut rng, false),
            OverlayLayer::Scuffs => scuffs(buffer, sample, &mut rng),
            OverlayLayer::HeavyScratches => scratches(buffer, sample, &mut rng, true),
            OverlayLayer::RustBlotches => rust_blotches(buffer, sample, &mut rng),
        }
    }
}

fn scratches(buffer: &mut PixelBuffer, sample: &WearSample, rng: &mut DeterministicRng, heavy: bool) {
    let layer = if heavy {
        OverlayLayer::HeavyScratches
    } else {
        OverlayLayer::Scratches
    };
    let count = layer.count(sample.intensity);

    let w = buffer.width as f64;
    let h = buffer.height as f64;
    let diag = (w * w + h * h).sqrt();

    for _ in 0..count {
        let x1 = rng.gen_f64() * w;
        let y1 = rng.gen_f64() * h;
        let angle = rng.gen_f64() * std::f64::consts::PI * 2.0;
        let length = (0.05 + rng.gen_f64() * 0.15) * diag;
        let x2 = x1 + angle.cos() * length;
        let y2 = y1 + angle.sin() * length;

        let (thickness, alpha) = if heavy {
            (2.5 + rng.gen_f64() * 1.5, 0.25 + rng.gen_f64() * 0.20)
        } else {
            (1.0 + rng.gen_f64() * 0.5, 0.08 + rng.gen_f64() * 0.10)
        };

        buffer.draw_line(x1, y1, x2, y2, thickness, Color::rgba(0.0, 0.0, 0.0, alpha));
    }
}

fn scuffs(buffer: &mut PixelBuffer, sample: &WearSample, rng: &mut DeterministicRng) {
    let count = OverlayLayer::Scuffs.count(sample.intensity);
    let side = buffer.width as f64;

    for _ in 0..count {
        let cx = rng.gen_f64() * side;
        let cy = rng.gen_f64() * buffer.height as f64;
        let radius = 1.0 + rng.gen_f64() * 3.0;
        let alpha = 0.10 + rng.gen_f64() * 0.15;
        buffer.draw_disc(cx, cy, radius, Color::rgba(0.05, 0.05, 0.05, alpha));
    }
}

fn rust_blotches(buffer: &mut PixelBuffer, sample: &WearSample, rng: &mut DeterministicRng) {
    let count = OverlayLayer::RustBlotches.count(sample.intensity);
    let max_radius = (buffer.width as f64 / 64.0).max(3.0);

    for _ in 0..count {
        let cx = rng.gen_f64() * buffer.width as f64;
        let cy = rng.gen_f64() * buffer.height as f64;
        let radius = 2.0 + rng.gen_f64() * (max_radius - 2.0);
        let alpha = 0.20 + rng.gen_f64() * 0.30;
        let shade = 0.8 + rng.gen_f64() * 0.4;
        let c = RUST.scale(shade).clamp();
        buffer.draw_disc(cx, cy, radius, Color::rgba(c.r, c.g, c.b, alpha));
    }
}
