//! Embeddable facade tying the two input modalities to one scene.

use crate::command::{CommandError, Interpreter};
use crate::config::Config;
use crate::draw::Scene;
use crate::export::{SvgOptions, render_svg};
use crate::input::{InputState, PointerEvent, SnapGrid, Tool};
use crate::util::Point;

/// An interactive drawing surface.
///
/// Owns the scene plus both front ends: the pointer tool state machine and
/// the command interpreter. The two never touch each other's state - the
/// scene is their only shared structure - and everything runs synchronously
/// on the caller's thread, one event or line at a time.
///
/// Hosts feed pointer events (already transformed to scene coordinates) and
/// command lines in, and pull the scene or a rendered SVG document out.
#[derive(Debug, Default)]
pub struct Sketchpad {
    scene: Scene,
    input: InputState,
    interpreter: Interpreter,
}

impl Sketchpad {
    /// Creates a sketchpad configured from user settings.
    pub fn new(config: &Config) -> Self {
        let mut input = InputState::new(SnapGrid::new(config.grid.step));
        input.set_snap_enabled(config.grid.snap_enabled);

        Self {
            scene: Scene::new(config.canvas.width, config.canvas.height),
            input,
            interpreter: Interpreter::new(),
        }
    }

    /// Selects the active pointer tool (`None` deselects).
    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.input.set_tool(tool);
    }

    /// Enables or disables grid snapping for pointer input.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.input.set_snap_enabled(enabled);
    }

    /// Routes one pointer event to the tool state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(pos) => self.input.on_pointer_press(&mut self.scene, pos),
            PointerEvent::Motion(pos) => self.input.on_pointer_motion(&mut self.scene, pos),
            PointerEvent::Release => self.input.on_pointer_release(&mut self.scene),
        }
    }

    /// Runs one command line through the interpreter.
    ///
    /// Rejected lines change nothing and report why; see
    /// [`CommandError`] for the taxonomy.
    pub fn run_command(&mut self, line: &str) -> Result<(), CommandError> {
        self.interpreter.run_line(&mut self.scene, line)
    }

    /// The shared scene (committed shapes, draft, overlay).
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The pointer-side input state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// The turtle cursor position.
    pub fn cursor(&self) -> Point {
        self.interpreter.current_pos()
    }

    /// Renders the finished scene as an SVG document.
    pub fn export_svg(&self, options: &SvgOptions) -> String {
        render_svg(&self.scene, options)
    }
}
