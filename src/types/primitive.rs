//! Shape primitives with size-relative geometry.
//!
//! All coordinates and lengths are fractions of the owning canvas's width
//! and height (never raw pixels), so a generator's output keeps its visual
//! proportions at any requested size. Outline and line widths are the one
//! exception and are given in whole pixels, matching how pixel-art outlines
//! stay crisp at every scale.

use super::Colour;

/// A single paint operation in unit space.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePrimitive {
    /// Axis-aligned rectangle with origin `(x, y)` and extent `(w, h)`.
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<Colour>,
        outline: Option<Colour>,
        outline_width: u32,
    },

    /// Ellipse centred at `(cx, cy)` with radii `(rx, ry)`.
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        fill: Option<Colour>,
        outline: Option<Colour>,
        outline_width: u32,
    },

    /// Filled polygon over the given vertices.
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Colour,
    },

    /// Straight line segment.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        colour: Colour,
        width: u32,
    },
}

impl ShapePrimitive {
    /// Rectangle with optional fill and outline (1px outline by default).
    pub fn rect(x: f32, y: f32, w: f32, h: f32, fill: Option<Colour>, outline: Option<Colour>) -> Self {
        Self::Rect {
            x,
            y,
            w,
            h,
            fill,
            outline,
            outline_width: 1,
        }
    }

    /// Ellipse with optional fill and outline (1px outline by default).
    pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32, fill: Option<Colour>, outline: Option<Colour>) -> Self {
        Self::Ellipse {
            cx,
            cy,
            rx,
            ry,
            fill,
            outline,
            outline_width: 1,
        }
    }

    /// Filled polygon.
    pub fn polygon(points: Vec<(f32, f32)>, fill: Colour) -> Self {
        Self::Polygon { points, fill }
    }

    /// 1px line segment.
    pub fn line(from: (f32, f32), to: (f32, f32), colour: Colour) -> Self {
        Self::Line {
            from,
            to,
            colour,
            width: 1,
        }
    }

    /// Override the outline width (rect and ellipse) or line width.
    pub fn with_width(mut self, width: u32) -> Self {
        match &mut self {
            Self::Rect { outline_width, .. } | Self::Ellipse { outline_width, .. } => {
                *outline_width = width;
            }
            Self::Line { width: w, .. } => *w = width,
            Self::Polygon { .. } => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_defaults_to_1px_outline() {
        let prim = ShapePrimitive::rect(0.0, 0.0, 1.0, 1.0, Some(Colour::BLACK), Some(Colour::WHITE));
        match prim {
            ShapePrimitive::Rect { outline_width, .. } => assert_eq!(outline_width, 1),
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn test_with_width_on_ellipse() {
        let prim =
            ShapePrimitive::ellipse(0.5, 0.5, 0.35, 0.35, None, Some(Colour::BLACK)).with_width(3);
        match prim {
            ShapePrimitive::Ellipse { outline_width, .. } => assert_eq!(outline_width, 3),
            _ => panic!("expected ellipse"),
        }
    }

    #[test]
    fn test_with_width_on_line() {
        let prim = ShapePrimitive::line((0.0, 0.0), (1.0, 1.0), Colour::BLACK).with_width(2);
        match prim {
            ShapePrimitive::Line { width, .. } => assert_eq!(width, 2),
            _ => panic!("expected line"),
        }
    }

    #[test]
    fn test_with_width_ignores_polygon() {
        let prim = ShapePrimitive::polygon(vec![(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)], Colour::BLACK);
        let same = prim.clone().with_width(4);
        assert_eq!(prim, same);
    }
}
