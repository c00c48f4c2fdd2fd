//! Skinforge CLI - deterministic weapon-skin preview synthesis
//!
//! This binary renders skin previews to PNG, lists the pattern catalog,
//! and parses inventory metadata text.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use skinforge_cli::commands;

/// Skinforge - Deterministic Skin Texture Synthesis
#[derive(Parser)]
#[command(name = "skinforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a skin preview to a PNG file
    Render {
        /// Skin identifier (unknown ids render a neutral-gray fallback)
        #[arg(short, long)]
        skin: String,

        /// Wear float in [0, 1]; out-of-range values are clamped
        #[arg(short, long)]
        wear: f64,

        /// Pattern seed in [0, 1000]; out-of-range values are clamped
        #[arg(long, default_value_t = 0)]
        seed: i64,

        /// Square output resolution in pixels
        #[arg(long, default_value_t = 512)]
        size: u32,

        /// Externally authored base texture (PNG); a translucent alpha
        /// channel is treated as the wear mask
        #[arg(long)]
        base_texture: Option<String>,

        /// Write the extracted wear mask to this path (alpha-mask path only)
        #[arg(long)]
        mask_out: Option<String>,

        /// Output PNG path
        #[arg(short, long)]
        output: String,

        /// Custom catalog JSON file (default: builtin catalog)
        #[arg(long)]
        catalog: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the skin catalog
    Catalog {
        /// Custom catalog JSON file (default: builtin catalog)
        #[arg(long)]
        catalog: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Parse wear float and pattern template from inventory item text
    Parse {
        /// Inline item text
        #[arg(long)]
        text: Option<String>,

        /// Read item text from a file
        #[arg(long)]
        file: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            skin,
            wear,
            seed,
            size,
            base_texture,
            mask_out,
            output,
            catalog,
            json,
        } => commands::render::run(
            &skin,
            wear,
            seed,
            size,
            base_texture.as_deref(),
            mask_out.as_deref(),
            &output,
            catalog.as_deref(),
            json,
        ),
        Commands::Catalog { catalog, json } => commands::catalog::run(catalog.as_deref(), json),
        Commands::Parse { text, file, json } => {
            commands::parse::run(text.as_deref(), file.as_deref(), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
