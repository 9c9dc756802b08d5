//! Character part generators: head and torso.
//!
//! All geometry is given as named fractions of the requested size;
//! absolute detail offsets from the reference art (64px) are normalised
//! into the same unit space.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::types::{Palette, ShapePrimitive};

use super::{AssetCategory, GeneratedAsset};

// -- head proportions --

const BERET_TOP: f32 = 0.15;
const BERET_LEFT: f32 = 0.15;
const BERET_RIGHT: f32 = 0.85;
const BERET_BOTTOM: f32 = 0.4;
/// Tilt offsets, normalised from the 64px reference art.
const BERET_DROOP: f32 = 5.0 / 64.0;
const BERET_TUCK: f32 = 3.0 / 64.0;
const BERET_SAG: f32 = 2.0 / 64.0;

const BAND_Y: f32 = 0.4;
const BAND_HEIGHT: f32 = 3.0 / 64.0;

const BADGE_X: f32 = 0.72;
const BADGE_Y: f32 = 0.25;
const BADGE_RADIUS: f32 = 0.08;

const FACE_LEFT: f32 = 0.25;
const FACE_TOP: f32 = 0.35;
const FACE_RIGHT: f32 = 0.75;
const FACE_BOTTOM: f32 = 0.65;

const EYE_Y: f32 = 0.45;
const EYE_LEFT_X: f32 = 0.35;
const EYE_RIGHT_X: f32 = 0.65;
const EYE_RADIUS: f32 = 0.03;

const MOUTH_Y: f32 = 0.55;
const MOUTH_LEFT: f32 = 0.4;
const MOUTH_RIGHT: f32 = 0.6;

/// Unit-space primitives for the operator head.
///
/// Tilted beret with band and badge, face ellipse, two eyes, one mouth line.
pub fn head_primitives(palette: &Palette) -> Vec<ShapePrimitive> {
    let mut prims = Vec::with_capacity(7);

    prims.push(ShapePrimitive::polygon(
        vec![
            (BERET_LEFT, BERET_TOP + BERET_DROOP),
            (BERET_RIGHT, BERET_TOP),
            (BERET_RIGHT - BERET_TUCK, BERET_BOTTOM),
            (BERET_LEFT + BERET_TUCK, BERET_BOTTOM + BERET_SAG),
        ],
        palette.primary,
    ));

    prims.push(ShapePrimitive::rect(
        BERET_LEFT,
        BAND_Y,
        BERET_RIGHT - BERET_LEFT,
        BAND_HEIGHT,
        Some(palette.dark),
        None,
    ));

    prims.push(ShapePrimitive::ellipse(
        BADGE_X,
        BADGE_Y,
        BADGE_RADIUS,
        BADGE_RADIUS,
        Some(palette.accent),
        Some(palette.dark),
    ));

    prims.push(ShapePrimitive::ellipse(
        (FACE_LEFT + FACE_RIGHT) / 2.0,
        (FACE_TOP + FACE_BOTTOM) / 2.0,
        (FACE_RIGHT - FACE_LEFT) / 2.0,
        (FACE_BOTTOM - FACE_TOP) / 2.0,
        Some(palette.skin),
        None,
    ));

    for eye_x in [EYE_LEFT_X, EYE_RIGHT_X] {
        prims.push(ShapePrimitive::ellipse(
            eye_x,
            EYE_Y,
            EYE_RADIUS,
            EYE_RADIUS,
            Some(palette.dark),
            None,
        ));
    }

    prims.push(ShapePrimitive::line(
        (MOUTH_LEFT, MOUTH_Y),
        (MOUTH_RIGHT, MOUTH_Y),
        palette.dark,
    ));

    prims
}

/// Generate the operator head sprite.
pub fn generate_head(palette: &Palette, size: u32) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(size, size)?;
    for primitive in head_primitives(palette) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new("head", AssetCategory::Characters, canvas))
}

// -- torso proportions --

const TORSO_LEFT: f32 = 0.2;
const TORSO_TOP: f32 = 0.1;
const TORSO_RIGHT: f32 = 0.8;
const TORSO_BOTTOM: f32 = 0.7;

const ARMOR_LEFT: f32 = 0.3;
const ARMOR_TOP: f32 = 0.15;
const ARMOR_RIGHT: f32 = 0.7;
const ARMOR_BOTTOM: f32 = 0.6;

const POUCH_XS: [f32; 3] = [0.35, 0.5, 0.65];
const POUCH_WIDTH: f32 = 0.08;
const POUCH_INSET: f32 = 0.1;

const SHOULDER_DIAMETER: f32 = 0.12;

/// Unit-space primitives for the armored torso.
///
/// Uniform base, outlined armor vest, exactly three pouches, two shoulder
/// plates straddling the armor edges.
pub fn torso_primitives(palette: &Palette) -> Vec<ShapePrimitive> {
    let mut prims = Vec::with_capacity(7);

    prims.push(ShapePrimitive::rect(
        TORSO_LEFT,
        TORSO_TOP,
        TORSO_RIGHT - TORSO_LEFT,
        TORSO_BOTTOM - TORSO_TOP,
        Some(palette.secondary),
        None,
    ));

    prims.push(ShapePrimitive::rect(
        ARMOR_LEFT,
        ARMOR_TOP,
        ARMOR_RIGHT - ARMOR_LEFT,
        ARMOR_BOTTOM - ARMOR_TOP,
        Some(palette.armor),
        Some(palette.dark),
    ));

    for pouch_x in POUCH_XS {
        prims.push(ShapePrimitive::rect(
            pouch_x,
            ARMOR_TOP + POUCH_INSET,
            POUCH_WIDTH,
            (ARMOR_BOTTOM - POUCH_INSET) - (ARMOR_TOP + POUCH_INSET),
            Some(palette.dark),
            Some(palette.mid),
        ));
    }

    let shoulder_r = SHOULDER_DIAMETER / 2.0;
    for shoulder_cx in [ARMOR_LEFT - shoulder_r, ARMOR_RIGHT + shoulder_r] {
        prims.push(ShapePrimitive::ellipse(
            shoulder_cx,
            ARMOR_TOP + shoulder_r,
            shoulder_r,
            shoulder_r,
            Some(palette.plate),
            None,
        ));
    }

    prims
}

/// Generate the armored torso sprite.
pub fn generate_torso(palette: &Palette, size: u32) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(size, size)?;
    for primitive in torso_primitives(palette) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new("torso", AssetCategory::Characters, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn palette() -> Palette {
        Palette::military()
    }

    #[test]
    fn test_head_has_requested_size() {
        for size in [16, 64, 200] {
            let asset = generate_head(&palette(), size).unwrap();
            assert_eq!(asset.canvas.size(), (size, size));
        }
    }

    #[test]
    fn test_head_rejects_zero_size() {
        assert!(generate_head(&palette(), 0).is_err());
    }

    #[test]
    fn test_head_topology() {
        let prims = head_primitives(&palette());
        assert_eq!(prims.len(), 7);

        // Exactly two eye dots: ellipses with the eye radius
        let eyes = prims
            .iter()
            .filter(|p| matches!(p, ShapePrimitive::Ellipse { rx, .. } if *rx == EYE_RADIUS))
            .count();
        assert_eq!(eyes, 2);

        // One mouth line
        let lines = prims
            .iter()
            .filter(|p| matches!(p, ShapePrimitive::Line { .. }))
            .count();
        assert_eq!(lines, 1);

        // One beret polygon with four points
        match &prims[0] {
            ShapePrimitive::Polygon { points, fill } => {
                assert_eq!(points.len(), 4);
                assert_eq!(*fill, palette().primary);
            }
            other => panic!("expected beret polygon first, got {:?}", other),
        }
    }

    #[test]
    fn test_head_primitives_are_size_independent() {
        // Unit-space geometry never changes with the requested size
        assert_eq!(head_primitives(&palette()), head_primitives(&palette()));
    }

    #[test]
    fn test_head_face_is_skin_toned() {
        let asset = generate_head(&palette(), 64).unwrap();
        // Centre of the face ellipse, below the beret band
        assert_eq!(asset.canvas.get(32, 38), Some(palette().skin));
    }

    #[test]
    fn test_torso_has_requested_size() {
        for size in [32, 64, 128] {
            let asset = generate_torso(&palette(), size).unwrap();
            assert_eq!(asset.canvas.size(), (size, size));
        }
    }

    #[test]
    fn test_torso_topology() {
        let prims = torso_primitives(&palette());
        assert_eq!(prims.len(), 7);

        // Exactly three pouches: dark-filled rects with the pouch width
        let pouches = prims
            .iter()
            .filter(|p| matches!(p, ShapePrimitive::Rect { w, .. } if *w == POUCH_WIDTH))
            .count();
        assert_eq!(pouches, 3);

        // Two shoulder plates
        let shoulders = prims
            .iter()
            .filter(|p| matches!(p, ShapePrimitive::Ellipse { .. }))
            .count();
        assert_eq!(shoulders, 2);
    }

    #[test]
    fn test_torso_corners_transparent() {
        let asset = generate_torso(&palette(), 64).unwrap();
        assert_eq!(asset.canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(asset.canvas.get(63, 63), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_torso_uniform_base_colour() {
        let asset = generate_torso(&palette(), 64).unwrap();
        // Inside the uniform but outside the armor vest
        assert_eq!(asset.canvas.get(15, 30), Some(palette().secondary));
    }
}
