//! Render command implementation
//!
//! Synthesizes a skin preview and writes it out as a deterministic PNG.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use skinforge_engine::{png_io, PngConfig, SkinSynthesisPipeline, TextureSize};
use skinforge_spec::{MaterialParameters, PatternSeed, WearBand};

use super::load_catalog;

/// Machine-readable render report.
#[derive(Debug, Serialize)]
struct RenderOutput {
    skin_id: String,
    known_skin: bool,
    wear_float: f64,
    pattern_seed: u32,
    band: WearBand,
    band_label: String,
    material: MaterialParameters,
    width: u32,
    height: u32,
    pixel_hash: String,
    png_hash: String,
    output: String,
    mask_output: Option<String>,
    alpha_mask: bool,
    elapsed_ms: u128,
}

/// Run the render command.
///
/// # Arguments
/// * `skin` - Skin identifier (unknown ids render the neutral-gray fallback)
/// * `wear` - Wear float in [0, 1] (clamped)
/// * `seed` - Pattern seed in [0, 1000] (clamped)
/// * `size` - Square output resolution in pixels
/// * `base_texture` - Optional externally authored base texture (PNG)
/// * `mask_out` - Where to write the extracted wear mask, if one exists
/// * `output` - Output PNG path
/// * `catalog_file` - Optional custom catalog JSON
/// * `json_output` - Machine-readable JSON instead of colored output
#[allow(clippy::too_many_arguments)]
pub fn run(
    skin: &str,
    wear: f64,
    seed: i64,
    size: u32,
    base_texture: Option<&str>,
    mask_out: Option<&str>,
    output: &str,
    catalog_file: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let catalog = load_catalog(catalog_file)?;
    let known_skin = catalog.get(skin).is_some();

    let pipeline = match base_texture {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read base texture: {}", path))?;
            SkinSynthesisPipeline::with_base_texture(catalog, &bytes)
        }
        None => SkinSynthesisPipeline::new(catalog),
    };

    let result = pipeline.synthesize_sized(
        skin,
        wear,
        PatternSeed::new(seed),
        TextureSize::Custom(size),
    );

    let config = PngConfig::default();
    let (png_bytes, png_hash) = png_io::write_rgba_to_vec_with_hash(&result.pixels, &config)?;
    std::fs::write(output, &png_bytes)
        .with_context(|| format!("failed to write output: {}", output))?;

    let mask_output = match (&result.wear_mask, mask_out) {
        (Some(mask), Some(path)) => {
            png_io::write_gray(mask, Path::new(path), &config)
                .with_context(|| format!("failed to write wear mask: {}", path))?;
            Some(path.to_string())
        }
        _ => None,
    };

    if json_output {
        let report = RenderOutput {
            skin_id: skin.to_string(),
            known_skin,
            wear_float: wear,
            pattern_seed: PatternSeed::new(seed).value(),
            band: result.band,
            band_label: result.band.label().to_string(),
            material: result.material,
            width: result.pixels.width,
            height: result.pixels.height,
            pixel_hash: result.pixels.hash(),
            png_hash,
            output: output.to_string(),
            mask_output,
            alpha_mask: result.wear_mask.is_some(),
            elapsed_ms: start.elapsed().as_millis(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    if !known_skin {
        println!(
            "  {} unknown skin {}, rendering neutral-gray fallback",
            "!".yellow(),
            skin.bold()
        );
    }

    println!("{} {}", "Skin:".cyan().bold(), skin);
    println!(
        "{} {} (float {})",
        "Condition:".cyan().bold(),
        result.band.label(),
        wear
    );
    println!(
        "{} roughness {:.3}  metalness {:.3}  env {:.3}  normal {:.3}",
        "Material:".cyan().bold(),
        result.material.roughness,
        result.material.metalness,
        result.material.env_map_intensity,
        result.material.normal_scale
    );
    if result.wear_mask.is_some() {
        println!(
            "{} authored alpha wear mask (procedural overlay skipped)",
            "Wear mask:".cyan().bold()
        );
    }
    println!("{} {}", "Content hash:".dimmed(), &result.pixels.hash()[..16]);
    println!(
        "{} {} ({}x{})",
        "Wrote".green().bold(),
        output,
        result.pixels.width,
        result.pixels.height
    );
    if let Some(path) = mask_output {
        println!("{} {}", "Wrote mask".green().bold(), path);
    }

    Ok(ExitCode::SUCCESS)
}
