//! Skinforge Synthesis Engine
//!
//! Given a skin identifier, a wear float, and a pattern seed, this crate
//! deterministically synthesizes an RGBA pixel buffer for the weapon's
//! paint job plus the physically-based material parameters the renderer
//! consumes. Output is byte-identical for identical inputs, which is what
//! makes content-addressed caching of shareable screenshots possible.
//!
//! # Example
//!
//! ```
//! use skinforge_engine::SkinSynthesisPipeline;
//! use skinforge_spec::{PatternCatalog, PatternSeed, WearBand};
//!
//! let pipeline = SkinSynthesisPipeline::new(PatternCatalog::builtin());
//! let result = pipeline.synthesize("crimson_web", 0.02, PatternSeed::new(1));
//!
//! assert_eq!(result.band, WearBand::FactoryNew);
//! assert!((result.material.roughness - 0.216).abs() < 1e-9);
//! ```
//!
//! # Determinism
//!
//! - All randomness derives from the pattern seed through PCG32; there is
//!   no unseeded random source anywhere in the engine.
//! - Overlay layers apply in a fixed order with `floor`ed counts.
//! - PNG encoding uses fixed compression settings so encoded files are
//!   byte-identical too.
//!
//! # Robustness
//!
//! No documented input makes synthesis fail: unknown skins render a
//! neutral-gray fallback, out-of-range floats and seeds are clamped, and
//! a base texture that fails to decode falls back to the procedural wear
//! path. The engine performs no network, filesystem, or database access;
//! the explicit [`png_io`] module is the caller-facing encode surface.

pub mod alpha_mask;
pub mod color;
pub mod compose;
pub mod overlay;
pub mod pipeline;
pub mod png_io;
pub mod raster;
pub mod rng;

// Re-export main types for convenience
pub use alpha_mask::WearMaskSource;
pub use color::Color;
pub use compose::{compose, TextureSize};
pub use overlay::{active_layers, apply_wear, apply_wear_in_place, OverlayLayer};
pub use pipeline::{SkinSynthesisPipeline, SynthesisResult};
pub use png_io::{PngConfig, PngError};
pub use raster::{GrayBuffer, PixelBuffer};
pub use rng::DeterministicRng;
