//! Pointer tool state machine and input state management.

use crate::input::{snap::SnapGrid, tool::Tool};
use crate::util::Point;

/// Number of control points a cubic curve gesture collects before committing.
pub(crate) const BEZIER_CONTROL_POINTS: usize = 4;

/// Current pointer gesture state.
///
/// Tracks whether the user is idle or mid-drag with a shape tool. The cubic
/// curve tool never enters `Drawing`: its gesture is a sequence of discrete
/// presses accumulated on [`InputState`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Actively dragging a shape (pointer held down)
    Drawing {
        /// Which tool started this gesture
        tool: Tool,
        /// Snapped position where the pointer was pressed
        anchor: Point,
    },
}

/// Pointer-side input state.
///
/// Holds the selected tool, the snap grid, the drag state machine, and the
/// accumulator for in-progress cubic curve gestures. All shape output goes
/// into the [`Scene`](crate::draw::Scene) passed to the event handlers; this
/// struct never touches the command interpreter's cursor or pending slot.
#[derive(Debug)]
pub struct InputState {
    /// Currently selected tool; `None` ignores presses entirely
    tool: Option<Tool>,
    /// Coordinate snapping policy applied to every pointer event
    snap: SnapGrid,
    /// Current gesture state machine
    state: DrawingState,
    /// Control points collected so far by the cubic curve tool.
    ///
    /// A standing field: collected points survive a mid-collection switch to
    /// another tool.
    bezier_points: Vec<Point>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(SnapGrid::default())
    }
}

impl InputState {
    /// Creates an idle input state with no tool selected.
    pub fn new(snap: SnapGrid) -> Self {
        Self {
            tool: None,
            snap,
            state: DrawingState::Idle,
            bezier_points: Vec::new(),
        }
    }

    /// Selects the active tool (`None` deselects).
    ///
    /// A pure state write: an in-flight drag keeps the tool it started with,
    /// and collected curve points survive the switch.
    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.tool = tool;
    }

    /// The currently selected tool.
    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    /// Enables or disables grid snapping.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap.set_enabled(enabled);
    }

    /// Whether grid snapping is currently active.
    pub fn snap_enabled(&self) -> bool {
        self.snap.enabled()
    }

    /// The snap grid applied to pointer coordinates.
    pub fn snap_grid(&self) -> &SnapGrid {
        &self.snap
    }

    /// Current gesture state.
    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub(super) fn set_state(&mut self, state: DrawingState) {
        self.state = state;
    }

    /// Control points collected so far by an in-progress curve gesture.
    pub fn pending_curve_points(&self) -> &[Point] {
        &self.bezier_points
    }

    pub(super) fn bezier_points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.bezier_points
    }
}
