//! PNG input/output for canvases.
//!
//! Persists canvases as lossless RGBA PNG with optional integer scaling,
//! and reads them back pixel-for-pixel.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::canvas::Canvas;
use crate::error::{PxgenError, Result};
use crate::types::Colour;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let width = canvas.width() * scale;
    let height = canvas.height() * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in canvas.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| PxgenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Read a PNG file back into a canvas.
pub fn read_png(path: &Path) -> Result<Canvas> {
    let img = image::open(path)
        .map_err(|e| PxgenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read PNG: {}", e),
        })?
        .to_rgba8();

    let pixels: Vec<Vec<Colour>> = img
        .rows()
        .map(|row| {
            row.map(|pixel| {
                let [r, g, b, a] = pixel.0;
                Colour::new(r, g, b, a)
            })
            .collect()
        })
        .collect();

    Canvas::from_pixels(pixels)
}
