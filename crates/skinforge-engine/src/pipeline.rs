//! Synthesis pipeline: one entry point over catalog lookup, composition,
//! wear classification, overlay or mask application, and material
//! derivation.

use skinforge_spec::{MaterialParameters, PatternCatalog, PatternSeed, WearBand, WearSample};

use crate::alpha_mask::{self, WearMaskSource};
use crate::compose::{compose, TextureSize};
use crate::overlay;
use crate::raster::{GrayBuffer, PixelBuffer};

/// Everything one synthesis call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    /// The composited paint-job texture, owned by the caller.
    pub pixels: PixelBuffer,
    /// Render material parameters (seed-independent).
    pub material: MaterialParameters,
    /// Wear band for the display label.
    pub band: WearBand,
    /// The authored wear mask, present only on the alpha-channel path.
    /// The renderer consumes it in place of a roughness map.
    pub wear_mask: Option<GrayBuffer>,
}

/// Orchestrates skin synthesis behind one entry point.
///
/// Holds the immutable catalog and the per-texture wear-mask decision.
/// `synthesize` takes `&self` and owns no mutable state, so independent
/// calls may run concurrently (one per visible weapon slot) with no
/// locking. If a caller issues a new request before a prior one finishes,
/// discarding the stale result is the caller's job, not the engine's.
#[derive(Debug, Clone)]
pub struct SkinSynthesisPipeline {
    catalog: PatternCatalog,
    mask_source: WearMaskSource,
}

impl SkinSynthesisPipeline {
    /// Create a pipeline on the procedural wear path.
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog,
            mask_source: WearMaskSource::Procedural,
        }
    }

    /// Create a pipeline for an externally supplied base texture.
    ///
    /// The texture's alpha channel is inspected exactly once, here. If any
    /// pixel is translucent the alpha channel becomes the wear mask and
    /// the procedural overlay is never invoked for this pipeline; decode
    /// failures and fully opaque textures use the procedural path.
    pub fn with_base_texture(catalog: PatternCatalog, png_bytes: &[u8]) -> Self {
        Self {
            catalog,
            mask_source: WearMaskSource::detect(png_bytes),
        }
    }

    /// Which wear-mask source this pipeline decided on.
    pub fn mask_source(&self) -> &WearMaskSource {
        &self.mask_source
    }

    /// The catalog backing this pipeline.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Synthesize at the default 512x512 resolution.
    ///
    /// Pure in its inputs: identical `(skin_id, wear_float, seed)` triples
    /// yield byte-identical pixels and identical material parameters.
    /// Never fails; unknown ids render the neutral-gray fallback.
    pub fn synthesize(&self, skin_id: &str, wear_float: f64, seed: PatternSeed) -> SynthesisResult {
        self.synthesize_sized(skin_id, wear_float, seed, TextureSize::default())
    }

    /// Synthesize at an explicit resolution.
    pub fn synthesize_sized(
        &self,
        skin_id: &str,
        wear_float: f64,
        seed: PatternSeed,
        size: TextureSize,
    ) -> SynthesisResult {
        let def = self.catalog.get_or_fallback(skin_id);
        let base = compose(def, seed, size);
        let sample = WearSample::classify(wear_float);

        // Mutually exclusive branch, decided once at texture load.
        let (pixels, wear_mask) = match &self.mask_source {
            WearMaskSource::AlphaChannel(mask) => {
                (alpha_mask::apply_mask(&base, mask), Some(mask.clone()))
            }
            WearMaskSource::Procedural => (overlay::apply_wear(&base, &sample, seed), None),
        };

        SynthesisResult {
            pixels,
            material: MaterialParameters::derive(wear_float),
            band: sample.band,
            wear_mask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::png_io::{write_rgba_to_vec_with_hash, PngConfig};
    use pretty_assertions::assert_eq;

    fn pipeline() -> SkinSynthesisPipeline {
        SkinSynthesisPipeline::new(PatternCatalog::builtin())
    }

    fn small(
        p: &SkinSynthesisPipeline,
        skin: &str,
        wear: f64,
        seed: i64,
    ) -> SynthesisResult {
        p.synthesize_sized(skin, wear, PatternSeed::new(seed), TextureSize::Custom(64))
    }

    #[test]
    fn synthesize_is_deterministic() {
        let p = pipeline();
        let a = small(&p, "crimson_web", 0.15, 5);
        let b = small(&p, "crimson_web", 0.15, 5);
        assert_eq!(a.pixels, b.pixels);
        assert_eq!(a.pixels.hash(), b.pixels.hash());
        assert_eq!(a.material, b.material);
    }

    #[test]
    fn different_seed_changes_pixels_not_material() {
        let p = pipeline();
        let a = small(&p, "crimson_web", 0.15, 5);
        let b = small(&p, "crimson_web", 0.15, 6);
        assert_ne!(a.pixels, b.pixels);
        assert_eq!(a.material, b.material);
    }

    #[test]
    fn unknown_skin_uses_fallback_and_never_panics() {
        let p = pipeline();
        let result = small(&p, "nonexistent_skin_xyz", 0.15, 1);
        assert_eq!(result.band, WearBand::FieldTested);

        // Fallback renders the same bytes as asking for the fallback id.
        let fallback = small(&p, "default", 0.15, 1);
        assert_eq!(result.pixels, fallback.pixels);
    }

    #[test]
    fn factory_new_scenario() {
        let p = pipeline();
        let result = small(&p, "crimson_web", 0.02, 1);
        assert_eq!(result.band, WearBand::FactoryNew);
        assert!((result.material.roughness - 0.216).abs() < 1e-9);
        assert!((result.material.metalness - 0.788).abs() < 1e-9);

        // Zero overlay layers: output matches the bare composition.
        let def = p.catalog().get("crimson_web").unwrap();
        let base = compose(def, PatternSeed::new(1), TextureSize::Custom(64));
        assert_eq!(result.pixels, base);
    }

    #[test]
    fn battle_scarred_scenario() {
        let p = pipeline();
        let result = small(&p, "crimson_web", 0.50, 1);
        assert_eq!(result.band, WearBand::BattleScarred);
        assert!((result.material.roughness - 0.6).abs() < 1e-9);
        assert!((result.material.metalness - 0.5).abs() < 1e-9);

        let def = p.catalog().get("crimson_web").unwrap();
        let base = compose(def, PatternSeed::new(1), TextureSize::Custom(64));
        assert_ne!(result.pixels, base);
    }

    #[test]
    fn alpha_mask_path_skips_procedural_overlay() {
        let mut texture = PixelBuffer::new(16, 16, Color::gray(0.5));
        texture.set(4, 4, Color::rgba(0.5, 0.5, 0.5, 0.5));
        let (png_bytes, _) =
            write_rgba_to_vec_with_hash(&texture, &PngConfig::default()).unwrap();

        let p = SkinSynthesisPipeline::with_base_texture(PatternCatalog::builtin(), &png_bytes);
        assert!(p.mask_source().is_alpha());

        // Battle-scarred wear, but the procedural overlay must not run:
        // the output equals the mask applied to the bare composition.
        let result = small(&p, "crimson_web", 0.50, 1);
        assert!(result.wear_mask.is_some());

        let def = p.catalog().get("crimson_web").unwrap();
        let base = compose(def, PatternSeed::new(1), TextureSize::Custom(64));
        let expected = alpha_mask::apply_mask(&base, result.wear_mask.as_ref().unwrap());
        assert_eq!(result.pixels, expected);
    }

    #[test]
    fn opaque_base_texture_stays_procedural() {
        let texture = PixelBuffer::new(16, 16, Color::gray(0.5));
        let (png_bytes, _) =
            write_rgba_to_vec_with_hash(&texture, &PngConfig::default()).unwrap();

        let p = SkinSynthesisPipeline::with_base_texture(PatternCatalog::builtin(), &png_bytes);
        assert_eq!(p.mask_source(), &WearMaskSource::Procedural);

        let result = small(&p, "crimson_web", 0.50, 1);
        assert!(result.wear_mask.is_none());
    }

    #[test]
    fn corrupt_base_texture_falls_back_to_procedural() {
        let p =
            SkinSynthesisPipeline::with_base_texture(PatternCatalog::builtin(), b"not a png");
        assert_eq!(p.mask_source(), &WearMaskSource::Procedural);

        // And synthesis still works end to end.
        let result = small(&p, "crimson_web", 0.30, 2);
        assert_eq!(result.band, WearBand::FieldTested);
    }

    #[test]
    fn default_resolution_is_512() {
        let p = pipeline();
        let result = p.synthesize("fade", 0.01, PatternSeed::new(0));
        assert_eq!(result.pixels.width, 512);
        assert_eq!(result.pixels.height, 512);
    }
}
