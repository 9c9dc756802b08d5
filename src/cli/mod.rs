pub mod generate;
pub mod palette;

use clap::{builder::PossibleValue, Parser, Subcommand, ValueEnum};

use crate::pipeline::Category;

/// pxgen - procedural game asset generator
#[derive(Parser, Debug)]
#[command(name = "pxgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate sprites, tiles, and effect frames
    Generate(generate::GenerateArgs),

    /// Show the built-in colour palette
    Palette(palette::PaletteArgs),
}

impl ValueEnum for Category {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Characters,
            Self::Weapons,
            Self::Ui,
            Self::Tiles,
            Self::Effects,
            Self::All,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let name = match self {
            Self::Characters => "characters",
            Self::Weapons => "weapons",
            Self::Ui => "ui",
            Self::Tiles => "tiles",
            Self::Effects => "effects",
            Self::All => "all",
        };
        Some(PossibleValue::new(name))
    }
}
