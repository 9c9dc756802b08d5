//! Transparent raster canvas and primitive paint operations.
//!
//! A `Canvas` is a pixel grid that starts fully transparent and accepts
//! paint operations in call order. Later opaque paints occlude earlier
//! pixels; partially transparent paints are alpha-blended over what is
//! already there. Geometry outside the canvas bounds is silently clipped.

use crate::error::{PxgenError, Result};
use crate::types::{Colour, ShapePrimitive};

/// A transparent raster surface.
///
/// Pixel grid is row-major (`pixels[y][x]`). Dimensions are always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Vec<Colour>>,
}

impl Canvas {
    /// Create a fully transparent canvas.
    ///
    /// Zero dimensions are a configuration error.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PxgenError::Config {
                message: format!("Canvas dimensions must be positive, got {}x{}", width, height),
                help: Some("Request a size of at least 1x1".to_string()),
            });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![vec![Colour::TRANSPARENT; width as usize]; height as usize],
        })
    }

    /// Build a canvas from an existing pixel grid (e.g. a decoded image).
    ///
    /// The grid must be non-empty and rectangular.
    pub fn from_pixels(pixels: Vec<Vec<Colour>>) -> Result<Self> {
        let height = pixels.len();
        let width = pixels.first().map_or(0, |row| row.len());

        if width == 0 || height == 0 {
            return Err(PxgenError::Config {
                message: "Pixel grid must be non-empty".to_string(),
                help: None,
            });
        }
        if pixels.iter().any(|row| row.len() != width) {
            return Err(PxgenError::Config {
                message: "Pixel grid rows must all have the same length".to_string(),
                help: None,
            });
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }

    /// Paint a primitive onto the canvas.
    ///
    /// The primitive's fractional geometry is resolved against this canvas's
    /// dimensions; anything falling outside the bounds is clipped.
    pub fn paint(&mut self, primitive: &ShapePrimitive) {
        match primitive {
            ShapePrimitive::Rect {
                x,
                y,
                w,
                h,
                fill,
                outline,
                outline_width,
            } => {
                let x0 = self.to_px_x(*x);
                let y0 = self.to_px_y(*y);
                let x1 = self.to_px_x(x + w);
                let y1 = self.to_px_y(y + h);

                if let Some(colour) = fill {
                    self.fill_rect(x0, y0, x1, y1, *colour);
                }
                if let Some(colour) = outline {
                    self.outline_rect(x0, y0, x1, y1, *colour, *outline_width);
                }
            }

            ShapePrimitive::Ellipse {
                cx,
                cy,
                rx,
                ry,
                fill,
                outline,
                outline_width,
            } => {
                let cx = cx * self.width as f32;
                let cy = cy * self.height as f32;
                let rx = rx * self.width as f32;
                let ry = ry * self.height as f32;

                if let Some(colour) = fill {
                    self.fill_ellipse(cx, cy, rx, ry, *colour);
                }
                if let Some(colour) = outline {
                    self.outline_ellipse(cx, cy, rx, ry, *colour, *outline_width);
                }
            }

            ShapePrimitive::Polygon { points, fill } => {
                let px_points: Vec<(f32, f32)> = points
                    .iter()
                    .map(|(x, y)| (x * self.width as f32, y * self.height as f32))
                    .collect();
                self.fill_polygon(&px_points, *fill);
            }

            ShapePrimitive::Line {
                from,
                to,
                colour,
                width,
            } => {
                let x0 = self.to_px_x(from.0);
                let y0 = self.to_px_y(from.1);
                let x1 = self.to_px_x(to.0);
                let y1 = self.to_px_y(to.1);
                self.draw_line(x0, y0, x1, y1, *colour, *width);
            }
        }
    }

    /// Paste another canvas at an offset, preserving alpha.
    ///
    /// Opaque source pixels occlude the destination, partially transparent
    /// ones blend, fully transparent ones are skipped. Pixels falling
    /// outside this canvas are clipped.
    pub fn blit(&mut self, source: &Canvas, offset_x: u32, offset_y: u32) {
        for sy in 0..source.height {
            let dy = offset_y as i64 + sy as i64;
            for sx in 0..source.width {
                let dx = offset_x as i64 + sx as i64;
                if let Some(pixel) = source.get(sx, sy) {
                    if !pixel.is_transparent() {
                        self.plot(dx, dy, pixel);
                    }
                }
            }
        }
    }

    // -- pixel-space helpers --

    fn to_px_x(&self, frac: f32) -> i64 {
        (frac * self.width as f32).round() as i64
    }

    fn to_px_y(&self, frac: f32) -> i64 {
        (frac * self.height as f32).round() as i64
    }

    /// Blend a single pixel, clipping out-of-bounds coordinates.
    fn plot(&mut self, x: i64, y: i64, colour: Colour) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let dst = &mut self.pixels[y as usize][x as usize];
        *dst = colour.over(*dst);
    }

    fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour) {
        for y in y0.min(y1)..y0.max(y1) {
            for x in x0.min(x1)..x0.max(x1) {
                self.plot(x, y, colour);
            }
        }
    }

    fn outline_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour, width: u32) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        for t in 0..width as i64 {
            let (lx, rx) = (x0 + t, x1 - 1 - t);
            let (ty, by) = (y0 + t, y1 - 1 - t);
            if lx > rx || ty > by {
                break;
            }
            for x in lx..=rx {
                self.plot(x, ty, colour);
                self.plot(x, by, colour);
            }
            for y in ty..=by {
                self.plot(lx, y, colour);
                self.plot(rx, y, colour);
            }
        }
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, colour: Colour) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let x_min = (cx - rx).floor() as i64;
        let x_max = (cx + rx).ceil() as i64;
        let y_min = (cy - ry).floor() as i64;
        let y_max = (cy + ry).ceil() as i64;

        for y in y_min..y_max {
            for x in x_min..x_max {
                if ellipse_contains(cx, cy, rx, ry, x, y) {
                    self.plot(x, y, colour);
                }
            }
        }
    }

    fn outline_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, colour: Colour, width: u32) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let inner_rx = rx - width as f32;
        let inner_ry = ry - width as f32;
        let has_hole = inner_rx > 0.0 && inner_ry > 0.0;

        let x_min = (cx - rx).floor() as i64;
        let x_max = (cx + rx).ceil() as i64;
        let y_min = (cy - ry).floor() as i64;
        let y_max = (cy + ry).ceil() as i64;

        for y in y_min..y_max {
            for x in x_min..x_max {
                if ellipse_contains(cx, cy, rx, ry, x, y)
                    && !(has_hole && ellipse_contains(cx, cy, inner_rx, inner_ry, x, y))
                {
                    self.plot(x, y, colour);
                }
            }
        }
    }

    /// Even-odd scanline polygon fill.
    fn fill_polygon(&mut self, points: &[(f32, f32)], colour: Colour) {
        if points.len() < 3 {
            return;
        }

        let y_min = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).floor() as i64;
        let y_max = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).ceil() as i64;

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

        for y in y_min..y_max {
            let scan_y = y as f32 + 0.5;
            crossings.clear();

            for i in 0..points.len() {
                let (x1, y1) = points[i];
                let (x2, y2) = points[(i + 1) % points.len()];
                if (y1 <= scan_y && y2 > scan_y) || (y2 <= scan_y && y1 > scan_y) {
                    let t = (scan_y - y1) / (y2 - y1);
                    crossings.push(x1 + t * (x2 - x1));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));

            for pair in crossings.chunks_exact(2) {
                let x_start = pair[0].round() as i64;
                let x_end = pair[1].round() as i64;
                for x in x_start..x_end {
                    self.plot(x, y, colour);
                }
            }
        }
    }

    /// Bresenham line; widths above 1 stamp a square at each step.
    fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour, width: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.stamp(x, y, colour, width);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn stamp(&mut self, x: i64, y: i64, colour: Colour, width: u32) {
        if width <= 1 {
            self.plot(x, y, colour);
            return;
        }
        let half = (width / 2) as i64;
        for oy in 0..width as i64 {
            for ox in 0..width as i64 {
                self.plot(x - half + ox, y - half + oy, colour);
            }
        }
    }
}

/// Pixel-centre containment test against an ellipse.
fn ellipse_contains(cx: f32, cy: f32, rx: f32, ry: f32, x: i64, y: i64) -> bool {
    let nx = (x as f32 + 0.5 - cx) / rx;
    let ny = (y as f32 + 0.5 - cy) / ry;
    nx * nx + ny * ny <= 1.0
}
