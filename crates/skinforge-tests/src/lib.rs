//! Skinforge End-to-End Test Infrastructure
//!
//! Integration tests for the synthesis contract:
//!
//! - **Determinism**: identical `(skin_id, float, seed)` triples produce
//!   byte-identical pixel buffers and identical material parameters
//! - **Scenarios**: wear-band boundaries, material monotonicity, fallback
//!   safety, overlay layer activation
//! - **PNG round trip**: deterministic encoding, decode fidelity, and
//!   alpha-mask detection on encoded files
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p skinforge-tests
//! ```

use skinforge_engine::{SkinSynthesisPipeline, SynthesisResult, TextureSize};
use skinforge_spec::{PatternCatalog, PatternSeed};

/// Resolution used by the integration suite; small enough to keep runs
/// fast, large enough that every overlay layer lands visible pixels.
pub const TEST_SIZE: TextureSize = TextureSize::Custom(96);

/// Build a pipeline over the builtin catalog.
pub fn test_pipeline() -> SkinSynthesisPipeline {
    SkinSynthesisPipeline::new(PatternCatalog::builtin())
}

/// Synthesize at the integration-test resolution.
pub fn synthesize(
    pipeline: &SkinSynthesisPipeline,
    skin: &str,
    wear: f64,
    seed: i64,
) -> SynthesisResult {
    pipeline.synthesize_sized(skin, wear, PatternSeed::new(seed), TEST_SIZE)
}
