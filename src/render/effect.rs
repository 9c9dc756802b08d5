//! Particle-effect frame generators.
//!
//! The muzzle flash is a three-frame animation keyed by frame index. The
//! flash colour dims with the frame number while the shape collapses from a
//! full burst to a small tail.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::types::{Colour, ShapePrimitive};

use super::{AssetCategory, GeneratedAsset};

/// Number of frames in the muzzle flash animation.
pub const FLASH_FRAMES: u32 = 3;

const FLASH_RED: u8 = 255;
const FLASH_BLUE: u8 = 50;

/// Ellipse inset for the frame-2 burst, from the 16px reference.
const BURST_INSET: f32 = 2.0 / 16.0;

/// Flash intensity for a frame: `max(50, 200 - frame * 50)`.
///
/// Frame 1 -> 150, frame 2 -> 100, frame 3 -> 50; later frames floor at 50.
pub fn flash_intensity(frame: u32) -> u8 {
    (200i64 - frame as i64 * 50).max(50) as u8
}

/// The yellow-orange flash colour for a frame.
pub fn flash_colour(frame: u32) -> Colour {
    Colour::rgb(FLASH_RED, flash_intensity(frame), FLASH_BLUE)
}

/// Unit-space primitives for a muzzle flash frame.
///
/// Frame 1 is a four-point burst, frame 2 an ellipse, and every later frame
/// the small trailing tail.
pub fn flash_primitives(frame: u32) -> Vec<ShapePrimitive> {
    let colour = flash_colour(frame);

    let shape = match frame {
        1 => ShapePrimitive::polygon(
            vec![(0.0, 0.5), (0.5, 0.0), (1.0, 0.5), (0.5, 1.0)],
            colour,
        ),
        2 => ShapePrimitive::ellipse(
            0.5,
            0.5,
            0.5 - BURST_INSET,
            0.5 - BURST_INSET,
            Some(colour),
            None,
        ),
        _ => ShapePrimitive::polygon(vec![(0.25, 0.5), (0.5, 0.25), (0.75, 0.5)], colour),
    };

    vec![shape]
}

/// Generate one muzzle flash animation frame.
pub fn generate_muzzle_flash(frame: u32, size: u32) -> Result<GeneratedAsset> {
    let mut canvas = Canvas::new(size, size)?;
    for primitive in flash_primitives(frame) {
        canvas.paint(&primitive);
    }
    Ok(GeneratedAsset::new(
        format!("muzzle_flash_{:02}", frame),
        AssetCategory::Effects,
        canvas,
    ))
}
