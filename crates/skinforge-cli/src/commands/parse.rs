//! Parse command implementation
//!
//! Extracts wear float and pattern template from inventory item text, the
//! same contract the import collaborator feeds the engine.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use skinforge_spec::{parse_item_text, PatternSeed, WearBand, WearSample};

/// Machine-readable parse report.
#[derive(Debug, Serialize)]
struct ParseOutput {
    float_value: Option<f64>,
    pattern_seed: Option<u32>,
    band: Option<WearBand>,
    band_label: Option<String>,
}

/// Run the parse command against inline text or a file.
pub fn run(text: Option<&str>, file: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let text = match (text, file) {
        (Some(t), None) => t.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read: {}", path))?,
        (Some(_), Some(_)) => bail!("pass either --text or --file, not both"),
        (None, None) => bail!("pass --text or --file"),
    };

    let info = parse_item_text(&text);
    let band = info.float_value.map(|f| WearSample::classify(f).band);
    let seed = info.pattern_seed.map(|s| PatternSeed::new(s).value());

    if json_output {
        let report = ParseOutput {
            float_value: info.float_value,
            pattern_seed: seed,
            band,
            band_label: band.map(|b| b.label().to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    match info.float_value {
        Some(f) => {
            let band = WearSample::classify(f).band;
            println!(
                "{} {} ({})",
                "Float value:".cyan().bold(),
                f,
                band.label()
            );
        }
        None => println!("{} not found", "Float value:".yellow()),
    }
    match seed {
        Some(s) => println!("{} {}", "Pattern template:".cyan().bold(), s),
        None => println!("{} not found", "Pattern template:".yellow()),
    }

    Ok(ExitCode::SUCCESS)
}
