//! UI widget generators: health bar, crosshair, and the unit emblem.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::types::{Palette, ShapePrimitive};

use super::{AssetCategory, GeneratedAsset};

// -- health bar proportions (200x20 reference) --

const BAR_FILL_LEFT: f32 = 2.0 / 200.0;
const BAR_FILL_RIGHT: f32 = 0.95;
const BAR_FILL_HEIGHT: f32 = 0.8;

/// Unit-space primitives for the health bar.
pub fn health_bar_primitives(palette: &Palette) -> Vec<ShapePrimitive> {
    let fill_top = (1.0 - BAR_FILL_HEIGHT) / 2.0;

    vec![
        // Dark background with a grey outline
        ShapePrimitive::rect(0.0, 0.0, 1.0, 1.0, Some(palette.charcoal), Some(palette.mid)),
        // Status-coloured fill
        ShapePrimitive::rect(
            BAR_FILL_LEFT,
            fill_top,
            BAR_FILL_RIGHT - BAR_FILL_LEFT,
            BAR_FILL_HEIGHT,
            Some(palette.health),
            None,
        ),
        // Contrasting border around the fill
        ShapePrimitive::rect(
            BAR_FILL_LEFT,
            fill_top,
            BAR_FILL_RIGHT - BAR_FILL_LEFT,
            BAR_FILL_HEIGHT,
            None,
            Some(palette.white),
        ),
    ]
}

/// Generate the health bar widget.
pub fn generate_health_bar(palette: &Palette, width: u32, height: u32) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(width, height)?;
    for primitive in health_bar_primitives(palette) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new("health_bar", AssetCategory::Ui, canvas))
}

// -- crosshair proportions (32 reference) --

/// Each bar extends a third of the size out from the centre.
const CROSSHAIR_REACH: f32 = 1.0 / 3.0;
const CROSSHAIR_THICKNESS: f32 = 2.0 / 32.0;
const CROSSHAIR_DOT_RADIUS: f32 = 2.0 / 32.0;

/// Unit-space primitives for the crosshair.
pub fn crosshair_primitives(palette: &Palette) -> Vec<ShapePrimitive> {
    let half_thickness = CROSSHAIR_THICKNESS / 2.0;

    vec![
        // Vertical bar
        ShapePrimitive::rect(
            0.5 - half_thickness,
            0.5 - CROSSHAIR_REACH,
            CROSSHAIR_THICKNESS,
            CROSSHAIR_REACH * 2.0,
            Some(palette.white),
            None,
        ),
        // Horizontal bar
        ShapePrimitive::rect(
            0.5 - CROSSHAIR_REACH,
            0.5 - half_thickness,
            CROSSHAIR_REACH * 2.0,
            CROSSHAIR_THICKNESS,
            Some(palette.white),
            None,
        ),
        // Centre dot in a contrasting colour
        ShapePrimitive::ellipse(
            0.5,
            0.5,
            CROSSHAIR_DOT_RADIUS,
            CROSSHAIR_DOT_RADIUS,
            Some(palette.warning),
            None,
        ),
    ]
}

/// Generate the crosshair widget.
pub fn generate_crosshair(palette: &Palette, size: u32) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(size, size)?;
    for primitive in crosshair_primitives(palette) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new("crosshair", AssetCategory::Ui, canvas))
}

// -- emblem proportions (256 reference) --

const SHIELD_LEFT: f32 = 0.2;
const SHIELD_TOP: f32 = 0.1;
const SHIELD_RIGHT: f32 = 0.8;
const SHIELD_BOTTOM: f32 = 0.9;

const BLADE_HALF_WIDTH: f32 = 3.0 / 256.0;
const BLADE_TOP: f32 = 0.2;
const BLADE_BOTTOM: f32 = 0.8;

const GUARD_LEFT: f32 = 0.35;
const GUARD_RIGHT: f32 = 0.65;
const GUARD_TOP: f32 = 0.5;
const GUARD_BOTTOM: f32 = 0.55;

const POMMEL_RADIUS: f32 = 0.08;

const RING_RADIUS: f32 = 0.35;
const RING_WIDTH: u32 = 3;

/// Unit-space primitives for the unit emblem.
///
/// Outlined shield, a centred vertical sword (blade, guard, pommel), and an
/// outlined ring over the lot.
pub fn emblem_primitives(palette: &Palette) -> Vec<ShapePrimitive> {
    vec![
        ShapePrimitive::rect(
            SHIELD_LEFT,
            SHIELD_TOP,
            SHIELD_RIGHT - SHIELD_LEFT,
            SHIELD_BOTTOM - SHIELD_TOP,
            Some(palette.primary),
            Some(palette.accent),
        ),
        // Blade
        ShapePrimitive::rect(
            0.5 - BLADE_HALF_WIDTH,
            BLADE_TOP,
            BLADE_HALF_WIDTH * 2.0,
            BLADE_BOTTOM - BLADE_TOP,
            Some(palette.light),
            None,
        ),
        // Cross guard
        ShapePrimitive::rect(
            GUARD_LEFT,
            GUARD_TOP,
            GUARD_RIGHT - GUARD_LEFT,
            GUARD_BOTTOM - GUARD_TOP,
            Some(palette.accent),
            None,
        ),
        // Pommel at the blade's foot
        ShapePrimitive::ellipse(
            0.5,
            BLADE_BOTTOM,
            POMMEL_RADIUS,
            POMMEL_RADIUS,
            Some(palette.accent),
            None,
        ),
        // Border ring
        ShapePrimitive::ellipse(0.5, 0.5, RING_RADIUS, RING_RADIUS, None, Some(palette.accent))
            .with_width(RING_WIDTH),
    ]
}

/// Generate the unit emblem.
pub fn generate_emblem(palette: &Palette, size: u32) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(size, size)?;
    for primitive in emblem_primitives(palette) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new("emblem", AssetCategory::Ui, canvas))
}
