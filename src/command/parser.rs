//! Line parser for the turtle command language.

use crate::util::Point;
use thiserror::Error;

/// A fully parsed command line.
///
/// Parsing is all-or-nothing: a line either becomes one of these values or a
/// [`CommandError`], so applying a command can never observe a half-valid
/// line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `start X Y` - absolute cursor jump; clears any pending operation
    Start { x: f64, y: f64 },
    /// `move DX DY` - relative cursor move, or completion of a pending
    /// circle/square
    Move { dx: f64, dy: f64 },
    /// `line DX DY` - line from the cursor to cursor+(DX,DY)
    Line { dx: f64, dy: f64 },
    /// `circle` (defer) or `circle R` (immediate)
    Circle { radius: Option<f64> },
    /// `square` (defer) or `square S` (immediate)
    Square { side: Option<f64> },
    /// `ellipse RX RY` - independent-radius ellipse at the cursor
    Ellipse { rx: f64, ry: f64 },
    /// `bezier A B C D` - immediate cubic curve from four `x,y` points
    Bezier { points: [Point; 4] },
}

/// Reasons a command line is rejected.
///
/// Rejection never surfaces as a user-visible failure inside the core - the
/// line is dropped whole and no state changes - but the reason is returned
/// so hosts can log it or abort in strict modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The verb is not part of the grammar
    #[error("unknown command `{0}`")]
    UnknownVerb(String),
    /// Too few or too many argument tokens for the verb
    #[error("`{verb}` takes {expected} argument(s), got {got}")]
    WrongArity {
        /// The verb as written in the grammar
        verb: &'static str,
        /// Human-readable arity ("2", "0 or 1", ...)
        expected: &'static str,
        /// Number of argument tokens actually present
        got: usize,
    },
    /// An argument token did not parse as a number
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    /// A curve point token was not of the form `x,y`
    #[error("invalid point `{0}`, expected `x,y`")]
    InvalidPoint(String),
}

/// Parses one line of input.
///
/// The line is lowercased and split on whitespace; the first token selects
/// the verb. Blank input parses to `None` (a no-op, not an error).
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let lowered = line.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let Some((&verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match verb {
        "start" => {
            expect_args("start", "2", args, 2)?;
            // Coordinate tokens may carry a literal axis marker, as in
            // `start 100x 200y`; the marker is stripped before parsing.
            Command::Start {
                x: parse_marked_number(args[0], 'x')?,
                y: parse_marked_number(args[1], 'y')?,
            }
        }
        "move" => {
            expect_args("move", "2", args, 2)?;
            Command::Move {
                dx: parse_number(args[0])?,
                dy: parse_number(args[1])?,
            }
        }
        "line" => {
            expect_args("line", "2", args, 2)?;
            Command::Line {
                dx: parse_number(args[0])?,
                dy: parse_number(args[1])?,
            }
        }
        "circle" => Command::Circle {
            radius: parse_optional_size("circle", args)?,
        },
        "square" => Command::Square {
            side: parse_optional_size("square", args)?,
        },
        "ellipse" => {
            expect_args("ellipse", "2", args, 2)?;
            Command::Ellipse {
                rx: parse_number(args[0])?,
                ry: parse_number(args[1])?,
            }
        }
        "bezier" => {
            expect_args("bezier", "4", args, 4)?;
            Command::Bezier {
                points: [
                    parse_point(args[0])?,
                    parse_point(args[1])?,
                    parse_point(args[2])?,
                    parse_point(args[3])?,
                ],
            }
        }
        other => return Err(CommandError::UnknownVerb(other.to_string())),
    };

    Ok(Some(command))
}

fn expect_args(
    verb: &'static str,
    expected: &'static str,
    args: &[&str],
    count: usize,
) -> Result<(), CommandError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::WrongArity {
            verb,
            expected,
            got: args.len(),
        })
    }
}

/// Shared `circle`/`square` arity handling: bare verb defers, one numeric
/// argument commits immediately.
fn parse_optional_size(verb: &'static str, args: &[&str]) -> Result<Option<f64>, CommandError> {
    match args {
        [] => Ok(None),
        [token] => Ok(Some(parse_number(token)?)),
        _ => Err(CommandError::WrongArity {
            verb,
            expected: "0 or 1",
            got: args.len(),
        }),
    }
}

fn parse_number(token: &str) -> Result<f64, CommandError> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

/// Parses a numeric token after stripping every occurrence of the given axis
/// marker character.
fn parse_marked_number(token: &str, marker: char) -> Result<f64, CommandError> {
    let stripped: String = token.chars().filter(|&c| c != marker).collect();
    stripped
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

fn parse_point(token: &str) -> Result<Point, CommandError> {
    let invalid = || CommandError::InvalidPoint(token.to_string());

    let mut parts = token.split(',');
    let x = parts.next().ok_or_else(invalid)?;
    let y = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(Point::new(
        x.parse().map_err(|_| invalid())?,
        y.parse().map_err(|_| invalid())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_a_noop() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t  "), Ok(None));
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(
            parse_line("MOVE 10 -5"),
            Ok(Some(Command::Move { dx: 10.0, dy: -5.0 }))
        );
    }

    #[test]
    fn start_strips_axis_markers() {
        assert_eq!(
            parse_line("start 100x 200y"),
            Ok(Some(Command::Start { x: 100.0, y: 200.0 }))
        );
        assert_eq!(
            parse_line("start 100 200"),
            Ok(Some(Command::Start { x: 100.0, y: 200.0 }))
        );
    }

    #[test]
    fn circle_and_square_arity_is_zero_or_one() {
        assert_eq!(parse_line("circle"), Ok(Some(Command::Circle { radius: None })));
        assert_eq!(
            parse_line("circle 25"),
            Ok(Some(Command::Circle { radius: Some(25.0) }))
        );
        assert_eq!(
            parse_line("square 40 50"),
            Err(CommandError::WrongArity {
                verb: "square",
                expected: "0 or 1",
                got: 2,
            })
        );
    }

    #[test]
    fn bezier_requires_four_points() {
        assert_eq!(
            parse_line("bezier 0,0 10,0 10,10"),
            Err(CommandError::WrongArity {
                verb: "bezier",
                expected: "4",
                got: 3,
            })
        );

        let parsed = parse_line("bezier 0,0 10,0 10,10 0,10").unwrap().unwrap();
        assert_eq!(
            parsed,
            Command::Bezier {
                points: [
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(10.0, 10.0),
                    Point::new(0.0, 10.0),
                ],
            }
        );
    }

    #[test]
    fn malformed_points_are_rejected() {
        assert_eq!(
            parse_line("bezier 0,0 10 10,10 0,10"),
            Err(CommandError::InvalidPoint("10".to_string()))
        );
        assert_eq!(
            parse_line("bezier 0,0,0 1,1 2,2 3,3"),
            Err(CommandError::InvalidPoint("0,0,0".to_string()))
        );
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert_eq!(
            parse_line("move ten 5"),
            Err(CommandError::InvalidNumber("ten".to_string()))
        );
        assert_eq!(
            parse_line("circle abc"),
            Err(CommandError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn wrong_arity_is_rejected_even_with_extra_tokens() {
        assert_eq!(
            parse_line("line 10"),
            Err(CommandError::WrongArity {
                verb: "line",
                expected: "2",
                got: 1,
            })
        );
        assert_eq!(
            parse_line("move 1 2 3"),
            Err(CommandError::WrongArity {
                verb: "move",
                expected: "2",
                got: 3,
            })
        );
    }

    #[test]
    fn unknown_verbs_are_rejected() {
        assert_eq!(
            parse_line("foo bar baz"),
            Err(CommandError::UnknownVerb("foo".to_string()))
        );
    }
}
