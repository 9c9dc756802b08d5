//! Tileset generator.
//!
//! Tiles are flat colour fills selected by material name, with optional
//! per-material texture overlays. The material table is tile-specific and
//! separate from the shared palette; unknown materials fall back to a
//! neutral grey rather than failing.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::types::{Colour, ShapePrimitive};

use super::{AssetCategory, GeneratedAsset};

/// Materials with a defined base colour.
pub const MATERIALS: [&str; 5] = ["concrete", "asphalt", "grass", "dirt", "wood"];

/// Base colour for unknown materials.
pub const FALLBACK_COLOUR: Colour = Colour::rgb(100, 100, 100);

const TILE_OUTLINE: Colour = Colour::rgb(100, 100, 100);
const CRACK_COLOUR: Colour = Colour::rgb(180, 180, 180);
const TUFT_COLOUR: Colour = Colour::rgb(20, 100, 20);

// Crack endpoints, normalised from the 32px reference tile.
const CRACK_A: ((f32, f32), (f32, f32)) = ((5.0 / 32.0, 0.0), (10.0 / 32.0, 1.0));
const CRACK_B: ((f32, f32), (f32, f32)) = ((0.5, 5.0 / 32.0), (0.8125, 27.0 / 32.0));

// Grass tufts sit on a 3x3 grid of regular offsets.
const TUFT_OFFSETS: [f32; 3] = [0.25, 0.5, 0.75];
const TUFT_DX: f32 = 2.0 / 32.0;
const TUFT_DY: f32 = 3.0 / 32.0;

/// Base colour for a material name, with the documented grey fallback.
pub fn material_colour(material: &str) -> Colour {
    match material {
        "concrete" => Colour::rgb(200, 200, 200),
        "asphalt" => Colour::rgb(50, 50, 50),
        "grass" => Colour::rgb(34, 139, 34),
        "dirt" => Colour::rgb(139, 90, 43),
        "wood" => Colour::rgb(160, 82, 45),
        _ => FALLBACK_COLOUR,
    }
}

/// Unit-space primitives for a tile of the given material.
pub fn tile_primitives(material: &str) -> Vec<ShapePrimitive> {
    let mut prims = vec![ShapePrimitive::rect(
        0.0,
        0.0,
        1.0,
        1.0,
        Some(material_colour(material)),
        Some(TILE_OUTLINE),
    )];

    match material {
        "concrete" => {
            prims.push(ShapePrimitive::line(CRACK_A.0, CRACK_A.1, CRACK_COLOUR));
            prims.push(ShapePrimitive::line(CRACK_B.0, CRACK_B.1, CRACK_COLOUR));
        }
        "grass" => {
            for y in TUFT_OFFSETS {
                for x in TUFT_OFFSETS {
                    prims.push(ShapePrimitive::line(
                        (x, y),
                        (x + TUFT_DX, y - TUFT_DY),
                        TUFT_COLOUR,
                    ));
                }
            }
        }
        // Other materials have no texture overlay
        _ => {}
    }

    prims
}

/// Generate a tile sprite.
///
/// `variant_seed` is a hook for future per-variant randomisation (colour
/// jitter, texture placement). Today every seed produces identical pixels;
/// the pipeline still emits one file per variant index.
pub fn generate_tile(material: &str, size: u32, variant_seed: u32) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(size, size)?;
    for primitive in tile_primitives(material) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new(
        format!("tile_{}_{}", material, variant_seed),
        AssetCategory::Tiles,
        canvas,
    ))
}
