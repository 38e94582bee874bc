//! Parsing of the raw `move` arguments into typed values.
//!
//! Nothing here looks at the board: a parsed command may still address an
//! empty slot or an illegal step.

use core::fmt;

use crate::board::Position;
use crate::direction::Direction;

/// Which argument of a move command failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Coordinate,
    Direction,
    SameDirection,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Coordinate => f.write_str("coordinate"),
            Token::Direction => f.write_str("direction"),
            Token::SameDirection => f.write_str("same-direction flag"),
        }
    }
}

/// Errors returned while parsing command tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Token does not have the expected shape.
    Format { token: Token, input: String },
    /// Token is shaped like a direction but the name table has no entry for it.
    DirectionTable(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Format { token, input } => {
                write!(f, "{} {:?} isn't in the expected format", token, input)
            }
            CommandError::DirectionTable(input) => write!(
                f,
                "direction {:?} is well formed but has no table entry",
                input
            ),
        }
    }
}

impl std::error::Error for CommandError {}

fn format_error(token: Token, input: &str) -> CommandError {
    CommandError::Format {
        token,
        input: input.to_string(),
    }
}

/// Parse `"<h>,<v>"` with 1-based single digits into a zero-based position.
pub fn parse_coordinate(input: &str) -> Result<Position, CommandError> {
    let err = || format_error(Token::Coordinate, input);
    let mut chars = input.chars();
    let (Some(h), Some(','), Some(v), None) =
        (chars.next(), chars.next(), chars.next(), chars.next())
    else {
        return Err(err());
    };
    let h = h.to_digit(10).filter(|d| *d >= 1).ok_or_else(err)?;
    let v = v.to_digit(10).filter(|d| *d >= 1).ok_or_else(err)?;
    Position::new(h as usize - 1, v as usize - 1).ok_or_else(err)
}

/// `true` when `lower` is an optional `north`/`south` followed by an optional
/// `east`/`west`.
fn is_direction_shaped(lower: &str) -> bool {
    let rest = lower
        .strip_prefix("north")
        .or_else(|| lower.strip_prefix("south"))
        .unwrap_or(lower);
    matches!(rest, "" | "east" | "west")
}

/// Parse a compass direction, ignoring ASCII case. The empty string is the
/// identity direction.
pub fn parse_direction(input: &str) -> Result<Direction, CommandError> {
    let lower = input.to_ascii_lowercase();
    if !is_direction_shaped(&lower) {
        return Err(format_error(Token::Direction, input));
    }
    Direction::from_name(&lower).ok_or_else(|| {
        log::error!("direction {:?} passed the shape check but is not in the table", input);
        CommandError::DirectionTable(input.to_string())
    })
}

/// Parse the same-direction capture flag.
pub fn parse_same_direction(input: &str) -> Result<bool, CommandError> {
    match input.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "t" => Ok(true),
        "no" | "n" | "false" | "f" => Ok(false),
        _ => Err(format_error(Token::SameDirection, input)),
    }
}

/// A fully parsed move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub from: Position,
    pub direction: Direction,
    /// Whether the capture ray follows the move vector (approach) or the
    /// opposite one (withdrawal).
    pub same_direction: bool,
}

impl MoveCommand {
    /// Parse all three tokens. The first failing token is reported.
    pub fn parse(coordinate: &str, direction: &str, same: &str) -> Result<Self, CommandError> {
        let from = parse_coordinate(coordinate);
        let direction = parse_direction(direction);
        let same_direction = parse_same_direction(same);
        Ok(Self {
            from: from?,
            direction: direction?,
            same_direction: same_direction?,
        })
    }
}
