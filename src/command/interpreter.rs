//! Turtle-style command interpreter driving the shared scene.

use crate::draw::{
    Scene, Shape,
    color::{BLACK, BLUE, DARK_GREEN, RED},
};
use crate::util::Point;

use super::parser::{Command, CommandError, parse_line};

/// Where the turtle cursor starts.
pub const START_POSITION: Point = Point::new(100.0, 100.0);

/// Radius of the marker dot stamped after each committing command.
const MARKER_RADIUS: f64 = 2.5;

const DEFAULT_LAST_RADIUS: f64 = 40.0;
const DEFAULT_LAST_SIZE: f64 = 80.0;

/// A deferred shape awaiting its `move` completion.
///
/// Set by a bare `circle`/`square` command; the center is the cursor position
/// at the moment the command was issued. At most one may be outstanding -
/// issuing another replaces it silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pending {
    /// Circle centered here; the next `move` displacement supplies the radius
    Circle(Point),
    /// Square centered here; the next `move` displacement supplies half the side
    Square(Point),
}

/// Command-language state: the persistent cursor, the pending slot, and the
/// session-scoped size memory.
///
/// The interpreter owns no scene; each line is applied against a borrowed
/// [`Scene`], the only state it shares with the pointer tools. Lines are
/// atomic: a line that fails to parse leaves cursor, pending slot, and scene
/// untouched.
#[derive(Debug)]
pub struct Interpreter {
    /// The turtle cursor shared by all commands
    current_pos: Point,
    /// At most one deferred circle/square
    pending: Option<Pending>,
    /// Most recently committed circle radius. Updated on every circle
    /// commit; nothing reads it back yet.
    last_radius: f64,
    /// Most recently committed square side, same recording-only role
    last_size: f64,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with the cursor at the fixed start position.
    pub fn new() -> Self {
        Self {
            current_pos: START_POSITION,
            pending: None,
            last_radius: DEFAULT_LAST_RADIUS,
            last_size: DEFAULT_LAST_SIZE,
        }
    }

    /// Parses and applies one line of input against the scene.
    ///
    /// Blank lines are no-ops. Rejected lines return the reason and change
    /// nothing; callers decide whether to log and continue or abort.
    pub fn run_line(&mut self, scene: &mut Scene, line: &str) -> Result<(), CommandError> {
        let Some(command) = parse_line(line)? else {
            return Ok(());
        };

        log::trace!("Applying command {command:?}");
        self.apply(scene, command);
        Ok(())
    }

    /// The turtle cursor position.
    pub fn current_pos(&self) -> Point {
        self.current_pos
    }

    /// The outstanding deferred operation, if any.
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Most recently committed circle radius.
    pub fn last_radius(&self) -> f64 {
        self.last_radius
    }

    /// Most recently committed square side.
    pub fn last_size(&self) -> f64 {
        self.last_size
    }

    fn apply(&mut self, scene: &mut Scene, command: Command) {
        match command {
            Command::Start { x, y } => {
                self.current_pos = Point::new(x, y);
                self.pending = None;
                self.draw_marker(scene);
            }
            Command::Move { dx, dy } => match self.pending.take() {
                Some(Pending::Circle(center)) => {
                    let target = center.offset(dx, dy);
                    let radius = center.distance_to(target);
                    scene.add_shape(circle(center, radius));
                    self.last_radius = radius;
                    self.current_pos = target;
                    self.draw_marker(scene);
                }
                Some(Pending::Square(center)) => {
                    let target = center.offset(dx, dy);
                    let side = 2.0 * center.distance_to(target);
                    scene.add_shape(centered_square(center, side));
                    self.last_size = side;
                    self.current_pos = target;
                    self.draw_marker(scene);
                }
                None => {
                    self.current_pos = self.current_pos.offset(dx, dy);
                    self.draw_marker(scene);
                }
            },
            Command::Line { dx, dy } => {
                let end = self.current_pos.offset(dx, dy);
                scene.add_shape(Shape::Line {
                    x1: self.current_pos.x,
                    y1: self.current_pos.y,
                    x2: end.x,
                    y2: end.y,
                    color: RED,
                });
                self.current_pos = end;
                self.draw_marker(scene);
            }
            Command::Circle { radius: Some(r) } => {
                scene.add_shape(circle(self.current_pos, r));
                self.last_radius = r;
                self.draw_marker(scene);
            }
            Command::Circle { radius: None } => {
                // Defer: remember the center, commit nothing, stamp no marker.
                self.pending = Some(Pending::Circle(self.current_pos));
            }
            Command::Square { side: Some(s) } => {
                scene.add_shape(centered_square(self.current_pos, s));
                self.last_size = s;
                self.draw_marker(scene);
            }
            Command::Square { side: None } => {
                self.pending = Some(Pending::Square(self.current_pos));
            }
            Command::Ellipse { rx, ry } => {
                scene.add_shape(Shape::Ellipse {
                    cx: self.current_pos.x,
                    cy: self.current_pos.y,
                    rx,
                    ry,
                    color: DARK_GREEN,
                    fill: None,
                });
                self.draw_marker(scene);
            }
            Command::Bezier { points } => {
                scene.add_shape(Shape::CubicPath {
                    p0: points[0],
                    p1: points[1],
                    p2: points[2],
                    p3: points[3],
                    color: DARK_GREEN,
                });
                // No marker and no cursor change: the curve is positioned
                // absolutely and does not involve the turtle.
            }
        }
    }

    /// Stamps the filled marker dot at the cursor.
    ///
    /// The marker is an ordinary committed shape; it participates in
    /// insertion order and export like everything else.
    fn draw_marker(&self, scene: &mut Scene) {
        scene.add_shape(Shape::Ellipse {
            cx: self.current_pos.x,
            cy: self.current_pos.y,
            rx: MARKER_RADIUS,
            ry: MARKER_RADIUS,
            color: BLACK,
            fill: Some(BLACK),
        });
    }
}

fn circle(center: Point, radius: f64) -> Shape {
    Shape::Ellipse {
        cx: center.x,
        cy: center.y,
        rx: radius,
        ry: radius,
        color: BLUE,
        fill: None,
    }
}

fn centered_square(center: Point, side: f64) -> Shape {
    Shape::Rect {
        x: center.x - side / 2.0,
        y: center.y - side / 2.0,
        w: side,
        h: side,
        color: BLACK,
        fill: None,
    }
}
