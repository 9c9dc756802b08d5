//! Generate command implementation.
//!
//! Runs the pipeline for the selected category, writes PNG assets under the
//! output root, and drops a `manifest.json` describing everything emitted.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PxgenError, Result};
use crate::output::{plural, Printer};
use crate::pipeline::{self, Category, ConsoleReporter, FsStore, NullReporter, Reporter};
use crate::types::Palette;

/// Generate sprites, tiles, and effect frames
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory
    #[arg(long, short, default_value = "assets")]
    pub output: PathBuf,

    /// Asset category to generate
    #[arg(long, value_enum, default_value = "all")]
    pub category: Category,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Suppress per-asset progress output
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| PxgenError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let palette = Palette::military();
    let store = FsStore::new(&args.output, args.scale);

    let reporter: Box<dyn Reporter> = if args.quiet {
        Box::new(NullReporter)
    } else {
        Box::new(ConsoleReporter::new())
    };

    let summary = pipeline::run(&palette, args.category, &store, reporter.as_ref());

    // Machine-readable record of the run, next to the assets.
    let manifest = serde_json::to_string_pretty(&summary).map_err(|e| PxgenError::Build {
        message: format!("Failed to serialize manifest: {}", e),
        help: None,
    })?;
    fs::write(args.output.join("manifest.json"), manifest)?;

    println!(
        "Generated {} to {}",
        plural(summary.assets.len(), "asset", "assets"),
        args.output.display()
    );

    if !summary.failures.is_empty() {
        let printer = Printer::new();
        for failure in &summary.failures {
            printer.error("Failed", &format!("{}: {}", failure.path, failure.message));
        }
        return Err(PxgenError::Build {
            message: format!(
                "{} could not be generated",
                plural(summary.failures.len(), "asset", "assets")
            ),
            help: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_characters_end_to_end() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        let args = GenerateArgs {
            output: output.clone(),
            category: Category::Characters,
            scale: 1,
            quiet: true,
        };

        run(args).unwrap();

        assert!(output.join("sprites/characters/head.png").exists());
        assert!(output.join("sprites/characters/torso.png").exists());
        assert!(output.join("sprites/characters/operator.png").exists());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["assets"].as_array().unwrap().len(), 3);
        assert_eq!(manifest["failures"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_generate_all_with_scale() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        let args = GenerateArgs {
            output: output.clone(),
            category: Category::All,
            scale: 2,
            quiet: true,
        };

        run(args).unwrap();

        // Scale applies at write time; the 32px tile lands as 64px
        let img = image::open(output.join("maps/tilesets/tile_grass_0.png")).unwrap();
        assert_eq!(img.width(), 64);

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["assets"].as_array().unwrap().len(), 33);
    }

    #[test]
    fn test_generate_effects_sheet_layout() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out");

        let args = GenerateArgs {
            output: output.clone(),
            category: Category::Effects,
            scale: 1,
            quiet: true,
        };

        run(args).unwrap();

        let sheet = image::open(output.join("effects/particles/muzzle_flash_sheet.png")).unwrap();
        assert_eq!(sheet.width(), 48);
        assert_eq!(sheet.height(), 16);
    }
}
