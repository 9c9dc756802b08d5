//! Compositor: assembles rendered canvases into sprites and spritesheets.

use crate::canvas::Canvas;
use crate::error::{PxgenError, Result};

/// Paste canvases at offsets onto a fresh transparent canvas.
///
/// The result is sized to contain the whole assembly. Parts are pasted in
/// order, so later opaque pixels occlude earlier ones while transparent
/// regions show the parts beneath.
pub fn assemble(parts: &[(&Canvas, (u32, u32))]) -> Result<Canvas> {
    if parts.is_empty() {
        return Err(PxgenError::Build {
            message: "Cannot assemble an empty part list".to_string(),
            help: None,
        });
    }

    let width = parts
        .iter()
        .map(|(canvas, (x, _))| x + canvas.width())
        .max()
        .unwrap_or(0);
    let height = parts
        .iter()
        .map(|(canvas, (_, y))| y + canvas.height())
        .max()
        .unwrap_or(0);

    let mut assembled = Canvas::new(width, height)?;
    for (canvas, (x, y)) in parts {
        assembled.blit(canvas, *x, *y);
    }

    Ok(assembled)
}

/// Pack equally-sized frames into a column x row grid spritesheet.
///
/// Frame at list index `i` lands in cell `(i % cols, i / cols)`. Frames
/// beyond `cols * rows` are dropped silently; a short frame list simply
/// leaves trailing cells transparent.
pub fn build_sheet(frames: &[&Canvas], cols: u32, rows: u32) -> Result<Canvas> {
    if cols == 0 || rows == 0 {
        return Err(PxgenError::Build {
            message: format!("Spritesheet grid must be non-empty, got {}x{}", cols, rows),
            help: None,
        });
    }
    let Some(first) = frames.first() else {
        return Err(PxgenError::Build {
            message: "Cannot build a spritesheet from zero frames".to_string(),
            help: None,
        });
    };

    let (frame_w, frame_h) = first.size();
    if let Some(mismatch) = frames.iter().find(|f| f.size() != (frame_w, frame_h)) {
        return Err(PxgenError::Build {
            message: format!(
                "Spritesheet frames must share dimensions: expected {}x{}, got {}x{}",
                frame_w,
                frame_h,
                mismatch.width(),
                mismatch.height()
            ),
            help: Some("Render all frames at the same size before packing".to_string()),
        });
    }

    let mut sheet = Canvas::new(frame_w * cols, frame_h * rows)?;

    for (index, frame) in frames.iter().enumerate() {
        if index as u32 >= cols * rows {
            break;
        }
        let col = index as u32 % cols;
        let row = index as u32 / cols;
        sheet.blit(frame, col * frame_w, row * frame_h);
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, ShapePrimitive};

    fn solid(w: u32, h: u32, colour: Colour) -> Canvas {
        let mut canvas = Canvas::new(w, h).unwrap();
        canvas.paint(&ShapePrimitive::rect(0.0, 0.0, 1.0, 1.0, Some(colour), None));
        canvas
    }

    #[test]
    fn test_assemble_sizes_to_contain() {
        let head = solid(4, 4, Colour::rgb(255, 0, 0));
        let torso = solid(4, 4, Colour::rgb(0, 255, 0));

        let result = assemble(&[(&head, (0, 0)), (&torso, (0, 2))]).unwrap();

        assert_eq!(result.size(), (4, 6));
    }

    #[test]
    fn test_assemble_later_parts_occlude() {
        let red = solid(2, 2, Colour::rgb(255, 0, 0));
        let green = solid(2, 2, Colour::rgb(0, 255, 0));

        let result = assemble(&[(&red, (0, 0)), (&green, (0, 1))]).unwrap();

        assert_eq!(result.get(0, 0), Some(Colour::rgb(255, 0, 0)));
        // Overlap row taken by the later paste
        assert_eq!(result.get(0, 1), Some(Colour::rgb(0, 255, 0)));
        assert_eq!(result.get(0, 2), Some(Colour::rgb(0, 255, 0)));
    }

    #[test]
    fn test_assemble_preserves_transparency() {
        let part = solid(2, 1, Colour::rgb(1, 2, 3));
        let result = assemble(&[(&part, (2, 1))]).unwrap();

        assert_eq!(result.size(), (4, 2));
        // The area before the offset stays transparent
        assert_eq!(result.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(result.get(2, 1), Some(Colour::rgb(1, 2, 3)));
    }

    #[test]
    fn test_assemble_empty_is_error() {
        assert!(assemble(&[]).is_err());
    }

    #[test]
    fn test_sheet_row_major_placement() {
        let frames: Vec<Canvas> = (0..5)
            .map(|i| solid(6, 6, Colour::rgb(i as u8 + 1, 0, 0)))
            .collect();
        let refs: Vec<&Canvas> = frames.iter().collect();

        let sheet = build_sheet(&refs, 3, 2).unwrap();

        assert_eq!(sheet.size(), (18, 12));
        // Frame index 4 lands in cell (1, 1)
        assert_eq!(sheet.get(6 + 1, 6 + 1), Some(Colour::rgb(5, 0, 0)));
        // First frame at cell (0, 0)
        assert_eq!(sheet.get(0, 0), Some(Colour::rgb(1, 0, 0)));
        // Unfilled cell (2, 1) stays transparent
        assert_eq!(sheet.get(12 + 1, 6 + 1), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_sheet_drops_overflow_frames() {
        let frames: Vec<Canvas> = (0..7)
            .map(|i| solid(4, 4, Colour::rgb(i as u8 + 1, 0, 0)))
            .collect();
        let refs: Vec<&Canvas> = frames.iter().collect();

        let sheet = build_sheet(&refs, 3, 2).unwrap();

        // The 7th frame (index 6) is dropped, not an error
        assert_eq!(sheet.size(), (12, 8));
        for y in 0..8 {
            for x in 0..12 {
                assert_ne!(sheet.get(x, y), Some(Colour::rgb(7, 0, 0)));
            }
        }
        // All six cells are filled
        for index in 0..6u32 {
            let (col, row) = (index % 3, index / 3);
            assert_eq!(
                sheet.get(col * 4, row * 4),
                Some(Colour::rgb(index as u8 + 1, 0, 0))
            );
        }
    }

    #[test]
    fn test_sheet_rejects_mismatched_frames() {
        let a = solid(4, 4, Colour::BLACK);
        let b = solid(4, 5, Colour::BLACK);
        assert!(build_sheet(&[&a, &b], 2, 1).is_err());
    }

    #[test]
    fn test_sheet_rejects_empty_inputs() {
        let a = solid(4, 4, Colour::BLACK);
        assert!(build_sheet(&[], 2, 2).is_err());
        assert!(build_sheet(&[&a], 0, 2).is_err());
        assert!(build_sheet(&[&a], 2, 0).is_err());
    }
}
