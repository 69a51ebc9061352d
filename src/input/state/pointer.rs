use crate::draw::{
    Scene, Shape,
    color::{BLACK, BLUE, DARK_GREEN, RED},
};
use crate::input::tool::Tool;
use crate::util::{Point, Rect};

use super::core::BEZIER_CONTROL_POINTS;
use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer press at a raw scene position.
    ///
    /// # Behavior
    /// - No tool selected: the event is ignored for shape purposes.
    /// - Curve tool: the snapped point joins the accumulator; the fourth
    ///   point commits one cubic path and resets the accumulator. The state
    ///   machine never enters `Drawing` for curves.
    /// - Any other tool: a zero-size draft of that tool's shape kind is
    ///   installed at the snapped point and a drag begins.
    pub fn on_pointer_press(&mut self, scene: &mut Scene, pos: Point) {
        let Some(tool) = self.tool() else {
            return;
        };

        let pt = self.snap_grid().snap(pos);

        if tool == Tool::Bezier {
            let points = self.bezier_points_mut();
            points.push(pt);
            if points.len() == BEZIER_CONTROL_POINTS {
                let shape = Shape::CubicPath {
                    p0: points[0],
                    p1: points[1],
                    p2: points[2],
                    p3: points[3],
                    color: DARK_GREEN,
                };
                points.clear();
                scene.add_shape(shape);
                log::debug!("Committed cubic curve from four presses");
            }
            return;
        }

        scene.set_draft(gesture_shape(tool, pt, pt));
        self.set_state(DrawingState::Drawing { tool, anchor: pt });
    }

    /// Processes pointer motion to a raw scene position.
    ///
    /// The overlay indicator follows the snapped position in every state,
    /// idle included. During a drag (curve tool excepted) the draft is
    /// rebuilt from the anchor and the current point.
    pub fn on_pointer_motion(&mut self, scene: &mut Scene, pos: Point) {
        let pt = self.snap_grid().snap(pos);
        scene.set_overlay(pt);

        if let DrawingState::Drawing { tool, anchor } = self.state() {
            scene.set_draft(gesture_shape(tool, anchor, pt));
        }
    }

    /// Processes a pointer release.
    ///
    /// Commits whatever draft exists and returns to idle - there is no
    /// discard path. A release while the curve tool is selected is a no-op:
    /// that gesture is driven entirely by presses.
    pub fn on_pointer_release(&mut self, scene: &mut Scene) {
        if self.tool() == Some(Tool::Bezier) {
            return;
        }

        if let DrawingState::Drawing { .. } = self.state() {
            scene.commit_draft();
            self.set_state(DrawingState::Idle);
        }
    }
}

/// Builds the draft shape for a drag gesture from its anchor and the current
/// snapped pointer position. `None` for the curve tool, which has no live
/// preview.
fn gesture_shape(tool: Tool, anchor: Point, cur: Point) -> Option<Shape> {
    match tool {
        Tool::Rect => {
            let bounds = Rect::from_corners(anchor, cur);
            Some(Shape::Rect {
                x: bounds.x,
                y: bounds.y,
                w: bounds.width,
                h: bounds.height,
                color: BLACK,
                fill: None,
            })
        }
        // The ellipse tool intentionally produces circles: the radius is the
        // anchor-to-pointer distance, not per-axis extents.
        Tool::Ellipse => {
            let r = anchor.distance_to(cur);
            Some(Shape::Ellipse {
                cx: anchor.x,
                cy: anchor.y,
                rx: r,
                ry: r,
                color: BLUE,
                fill: None,
            })
        }
        Tool::Line => Some(Shape::Line {
            x1: anchor.x,
            y1: anchor.y,
            x2: cur.x,
            y2: cur.y,
            color: RED,
        }),
        Tool::Bezier => None,
    }
}
