//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines what shape a pointer gesture creates. Tools are
/// selected externally (toolbar, menu, host API); "no tool selected" is the
/// `None` case of the `Option<Tool>` held by the input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Rectangle outline - from corner to corner
    Rect,
    /// Circle outline - anchored at the press point, radius follows the drag
    /// (kept as "ellipse" in name only; this tool never produces unequal radii)
    Ellipse,
    /// Straight line - between press and release points
    Line,
    /// Cubic curve - four discrete presses supply the control points
    Bezier,
}
