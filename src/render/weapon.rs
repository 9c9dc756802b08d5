//! Weapon sprite generator.
//!
//! One parametric shape covers every weapon kind; kinds differ only in
//! their width/height ratio. Five parts: stock, receiver, barrel, gas tube,
//! muzzle brake.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::types::{Palette, ShapePrimitive};

use super::{AssetCategory, GeneratedAsset};

/// Weapon kinds, distinguished by aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    /// Standard assault rifle.
    Rifle,
    /// Long, thin marksman rifle.
    Marksman,
    /// Compact sidearm.
    Sidearm,
}

impl WeaponKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rifle => "rifle",
            Self::Marksman => "marksman",
            Self::Sidearm => "sidearm",
        }
    }

    /// Default sprite dimensions for this kind.
    pub fn default_size(self) -> (u32, u32) {
        match self {
            Self::Rifle => (32, 16),
            Self::Marksman => (48, 12),
            Self::Sidearm => (16, 12),
        }
    }

    pub fn all() -> [WeaponKind; 3] {
        [Self::Rifle, Self::Marksman, Self::Sidearm]
    }
}

// Horizontal layout, left to right.
const STOCK_LEFT: f32 = 0.05;
const STOCK_RIGHT: f32 = 0.35;
const STOCK_TOP: f32 = 0.4;
const STOCK_BOTTOM: f32 = 0.6;

const RECEIVER_LEFT: f32 = 0.3;
const RECEIVER_RIGHT: f32 = 0.8;
const RECEIVER_TOP: f32 = 0.35;
const RECEIVER_BOTTOM: f32 = 0.65;

const BARREL_LEFT: f32 = 0.75;
const BARREL_RIGHT: f32 = 0.95;
const BARREL_TOP: f32 = 0.42;
const BARREL_BOTTOM: f32 = 0.58;

const GAS_TUBE_TOP: f32 = 0.25;
const GAS_TUBE_BOTTOM: f32 = 0.35;

const MUZZLE_LEFT: f32 = 0.95;
/// Muzzle brake taper, normalised from the 16px-high reference art.
const MUZZLE_INNER_HALF: f32 = 2.0 / 16.0;
const MUZZLE_OUTER_HALF: f32 = 3.0 / 16.0;

/// Unit-space primitives for a weapon body.
pub fn weapon_primitives(palette: &Palette) -> Vec<ShapePrimitive> {
    vec![
        // Stock (wooden furniture)
        ShapePrimitive::rect(
            STOCK_LEFT,
            STOCK_TOP,
            STOCK_RIGHT - STOCK_LEFT,
            STOCK_BOTTOM - STOCK_TOP,
            Some(palette.wood),
            None,
        ),
        // Receiver
        ShapePrimitive::rect(
            RECEIVER_LEFT,
            RECEIVER_TOP,
            RECEIVER_RIGHT - RECEIVER_LEFT,
            RECEIVER_BOTTOM - RECEIVER_TOP,
            Some(palette.dark),
            None,
        ),
        // Barrel, thinner than the receiver
        ShapePrimitive::rect(
            BARREL_LEFT,
            BARREL_TOP,
            BARREL_RIGHT - BARREL_LEFT,
            BARREL_BOTTOM - BARREL_TOP,
            Some(palette.gunmetal),
            None,
        ),
        // Gas tube running above receiver and barrel
        ShapePrimitive::rect(
            RECEIVER_LEFT,
            GAS_TUBE_TOP,
            BARREL_RIGHT - RECEIVER_LEFT,
            GAS_TUBE_BOTTOM - GAS_TUBE_TOP,
            Some(palette.steel),
            Some(palette.mid),
        ),
        // Muzzle brake at the barrel tip
        ShapePrimitive::polygon(
            vec![
                (MUZZLE_LEFT, 0.5 - MUZZLE_INNER_HALF),
                (1.0, 0.5 - MUZZLE_OUTER_HALF),
                (1.0, 0.5 + MUZZLE_OUTER_HALF),
                (MUZZLE_LEFT, 0.5 + MUZZLE_INNER_HALF),
            ],
            palette.charcoal,
        ),
    ]
}

/// Generate a weapon sprite at the given dimensions.
pub fn generate_weapon(
    palette: &Palette,
    kind: WeaponKind,
    width: u32,
    height: u32,
) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(width, height)?;
    for primitive in weapon_primitives(palette) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new(kind.name(), AssetCategory::Weapons, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::military()
    }

    #[test]
    fn test_weapon_has_requested_size() {
        for kind in WeaponKind::all() {
            let (w, h) = kind.default_size();
            let asset = generate_weapon(&palette(), kind, w, h).unwrap();
            assert_eq!(asset.canvas.size(), (w, h));
            assert_eq!(asset.name, kind.name());
        }
    }

    #[test]
    fn test_weapon_rejects_zero_dimension() {
        assert!(generate_weapon(&palette(), WeaponKind::Rifle, 0, 16).is_err());
        assert!(generate_weapon(&palette(), WeaponKind::Rifle, 32, 0).is_err());
    }

    #[test]
    fn test_weapon_has_five_parts() {
        let prims = weapon_primitives(&palette());
        assert_eq!(prims.len(), 5);

        let rects = prims
            .iter()
            .filter(|p| matches!(p, ShapePrimitive::Rect { .. }))
            .count();
        assert_eq!(rects, 4);

        // Muzzle brake polygon last, painted over everything else
        assert!(matches!(prims.last(), Some(ShapePrimitive::Polygon { .. })));
    }

    #[test]
    fn test_weapon_kinds_share_geometry() {
        // Every kind paints the same unit-space shape; only the canvas
        // dimensions differ.
        let prims = weapon_primitives(&palette());
        for kind in WeaponKind::all() {
            let (w, h) = kind.default_size();
            let asset = generate_weapon(&palette(), kind, w, h).unwrap();
            assert_eq!(asset.canvas.size(), (w, h));
        }
        assert_eq!(prims, weapon_primitives(&palette()));
    }

    #[test]
    fn test_receiver_is_dark() {
        let asset = generate_weapon(&palette(), WeaponKind::Rifle, 32, 16).unwrap();
        // Middle of the receiver: x 0.55 * 32, y 0.5 * 16
        assert_eq!(asset.canvas.get(17, 8), Some(palette().dark));
    }

    #[test]
    fn test_stock_is_wood() {
        let asset = generate_weapon(&palette(), WeaponKind::Rifle, 32, 16).unwrap();
        // Left of the receiver, inside the stock: x 0.2 * 32, y 0.5 * 16
        assert_eq!(asset.canvas.get(6, 8), Some(palette().wood));
    }
}
