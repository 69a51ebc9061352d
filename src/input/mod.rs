//! Input handling and the pointer tool state machine.
//!
//! This module translates backend pointer events into drawing actions. It
//! maintains the selected tool, the snap grid, and the state machine for
//! drag gestures and cubic curve collection. Command-language input lives in
//! [`crate::command`] and never touches anything here; the scene is the only
//! state the two modalities share.

pub mod events;
pub mod snap;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use snap::SnapGrid;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
