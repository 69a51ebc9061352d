//! Shape definitions for the vector scene.

use super::color::Color;
use crate::util::{Point, Rect};

/// Represents a committed or in-progress vector shape.
///
/// Each variant carries its full geometry plus the fixed stroke color chosen
/// by the operation that created it. Rectangles and ellipses may additionally
/// carry a fill (marker dots are filled; everything else is outline-only).
/// Shapes are immutable once committed to the scene; only the draft slot is
/// ever rewritten mid-gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle, stored as top-left corner plus extents
    Rect {
        /// Top-left X coordinate
        x: f64,
        /// Top-left Y coordinate
        y: f64,
        /// Width (always non-negative)
        w: f64,
        /// Height (always non-negative)
        h: f64,
        /// Stroke color
        color: Color,
        /// Optional interior fill
        fill: Option<Color>,
    },
    /// Axis-aligned ellipse; a circle is the `rx == ry` case
    Ellipse {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
        /// Stroke color
        color: Color,
        /// Optional interior fill
        fill: Option<Color>,
    },
    /// Straight line segment between two points
    Line {
        /// Starting X coordinate
        x1: f64,
        /// Starting Y coordinate
        y1: f64,
        /// Ending X coordinate
        x2: f64,
        /// Ending Y coordinate
        y2: f64,
        /// Stroke color
        color: Color,
    },
    /// Cubic Bezier curve with four control points in order
    CubicPath {
        /// Curve start point
        p0: Point,
        /// First control point
        p1: Point,
        /// Second control point
        p2: Point,
        /// Curve end point
        p3: Point,
        /// Stroke color
        color: Color,
    },
}

impl Shape {
    /// Returns the axis-aligned bounding box for this shape.
    ///
    /// For cubic curves the box covers the control polygon, which always
    /// contains the curve itself (the curve is a convex combination of its
    /// control points). Degenerate shapes yield an empty rectangle at their
    /// position.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Rect { x, y, w, h, .. } => Rect::new(*x, *y, *w, *h),
            Shape::Ellipse { cx, cy, rx, ry, .. } => {
                Rect::new(cx - rx, cy - ry, 2.0 * rx, 2.0 * ry)
            }
            Shape::Line { x1, y1, x2, y2, .. } => {
                Rect::from_corners(Point::new(*x1, *y1), Point::new(*x2, *y2))
            }
            Shape::CubicPath { p0, p1, p2, p3, .. } => control_polygon_bounds(&[*p0, *p1, *p2, *p3]),
        }
    }

    /// The stroke color this shape was created with.
    pub fn color(&self) -> Color {
        match self {
            Shape::Rect { color, .. }
            | Shape::Ellipse { color, .. }
            | Shape::Line { color, .. }
            | Shape::CubicPath { color, .. } => *color,
        }
    }
}

/// Min/max fold over a set of control points.
fn control_polygon_bounds(points: &[Point]) -> Rect {
    let mut min_x = points[0].x;
    let mut max_x = points[0].x;
    let mut min_y = points[0].y;
    let mut max_y = points[0].y;

    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, DARK_GREEN, RED};

    #[test]
    fn rect_bounding_box_matches_geometry() {
        let shape = Shape::Rect {
            x: 10.0,
            y: 20.0,
            w: 30.0,
            h: 40.0,
            color: BLACK,
            fill: None,
        };
        assert_eq!(shape.bounding_box(), Rect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn ellipse_bounding_box_spans_both_radii() {
        let shape = Shape::Ellipse {
            cx: 200.0,
            cy: 150.0,
            rx: 40.0,
            ry: 20.0,
            color: BLUE,
            fill: None,
        };
        assert_eq!(shape.bounding_box(), Rect::new(160.0, 130.0, 80.0, 40.0));
    }

    #[test]
    fn line_bounding_box_normalizes_direction() {
        let shape = Shape::Line {
            x1: 70.0,
            y1: 90.0,
            x2: 50.0,
            y2: 40.0,
            color: RED,
        };
        assert_eq!(shape.bounding_box(), Rect::new(50.0, 40.0, 20.0, 50.0));
    }

    #[test]
    fn cubic_bounding_box_covers_control_polygon() {
        let shape = Shape::CubicPath {
            p0: Point::new(0.0, 0.0),
            p1: Point::new(10.0, -30.0),
            p2: Point::new(40.0, 30.0),
            p3: Point::new(50.0, 0.0),
            color: DARK_GREEN,
        };
        assert_eq!(shape.bounding_box(), Rect::new(0.0, -30.0, 50.0, 60.0));
    }

    #[test]
    fn zero_size_shape_has_empty_bounds() {
        let shape = Shape::Rect {
            x: 5.0,
            y: 5.0,
            w: 0.0,
            h: 0.0,
            color: BLACK,
            fill: None,
        };
        assert!(shape.bounding_box().is_empty());
    }
}
