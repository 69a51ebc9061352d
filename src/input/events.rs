//! Generic input event types for cross-backend compatibility.

use crate::util::Point;

/// Generic pointer event representation.
///
/// Host backends map their native pointer events to these values for unified
/// handling. Positions are in scene coordinates; the host performs any
/// viewport-to-scene transform before delivering the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at the given scene position
    Press(Point),
    /// Pointer moved to the given scene position (button state irrelevant)
    Motion(Point),
    /// Primary button released
    Release,
}
