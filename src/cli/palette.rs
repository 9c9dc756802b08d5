//! Palette command implementation.
//!
//! Prints the built-in colour table to stdout, one `name hex` pair per line.
//! With `--find`, parses a hex colour and reports the closest named entry.

use clap::Args;

use crate::error::Result;
use crate::types::{Colour, Palette};

/// Show the built-in colour palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Report the palette entry closest to this hex colour (e.g. #8B1538)
    #[arg(long)]
    pub find: Option<Colour>,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    let palette = Palette::military();

    if let Some(target) = args.find {
        let (name, colour) = closest_entry(&palette, target);
        println!("{:<10} {}", name, colour);
        return Ok(());
    }

    for name in Palette::names() {
        if let Some(colour) = palette.get(name) {
            println!("{:<10} {}", name, colour);
        }
    }

    Ok(())
}

/// Nearest named colour by squared RGB distance; ties keep display order.
fn closest_entry(palette: &Palette, target: Colour) -> (&'static str, Colour) {
    let mut best = ("primary", palette.primary);
    let mut best_distance = u32::MAX;

    for name in Palette::names() {
        if let Some(colour) = palette.get(name) {
            let distance = rgb_distance(colour, target);
            if distance < best_distance {
                best = (name, colour);
                best_distance = distance;
            }
        }
    }

    best
}

fn rgb_distance(a: Colour, b: Colour) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_closest_entry_exact_match() {
        let palette = Palette::military();
        let target = Colour::from_hex("#D4AF37").unwrap();
        assert_eq!(closest_entry(&palette, target), ("accent", palette.accent));
    }

    #[test]
    fn test_closest_entry_near_match() {
        let palette = Palette::military();
        // A hair off the warning red still resolves to warning
        let target = Colour::rgb(190, 20, 50);
        assert_eq!(closest_entry(&palette, target), ("warning", palette.warning));
    }

    #[test]
    fn test_find_parses_hex_from_cli() {
        let cli = Cli::try_parse_from(["pxgen", "palette", "--find", "#8B1538"]).unwrap();
        match cli.command {
            Commands::Palette(args) => {
                assert_eq!(args.find, Some(Colour::rgb(139, 21, 56)));
            }
            _ => panic!("expected palette subcommand"),
        }
    }

    #[test]
    fn test_find_rejects_invalid_hex() {
        assert!(Cli::try_parse_from(["pxgen", "palette", "--find", "#XYZ"]).is_err());
        assert!(Cli::try_parse_from(["pxgen", "palette", "--find", "red"]).is_err());
    }
}
