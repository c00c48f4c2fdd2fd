//! Catalog command implementation
//!
//! Lists the skin definitions the synthesis engine knows about.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use skinforge_spec::SkinDefinition;

use super::load_catalog;

/// Run the catalog command.
pub fn run(catalog_file: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let catalog = load_catalog(catalog_file)?;

    let mut defs: Vec<&SkinDefinition> = catalog.iter().collect();
    defs.sort_by(|a, b| a.skin_id.cmp(&b.skin_id));

    if json_output {
        println!("{}", serde_json::to_string_pretty(&defs)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} skins",
        "Catalog:".cyan().bold(),
        defs.len()
    );
    for def in defs {
        let pattern = match def.pattern_color {
            Some(c) => format!("pattern [{:.2}, {:.2}, {:.2}]", c[0], c[1], c[2]),
            None => "no pattern color".to_string(),
        };
        println!(
            "  {:<16} paint {:<4} def {:<4} base [{:.2}, {:.2}, {:.2}]  {}  metallic {:.2}  roughness {:.2}",
            def.skin_id.bold(),
            def.paint_index,
            def.def_index,
            def.base_color[0],
            def.base_color[1],
            def.base_color[2],
            pattern.dimmed(),
            def.metallic,
            def.roughness
        );
    }

    Ok(ExitCode::SUCCESS)
}
