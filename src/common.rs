//! Error taxonomy shared by the session, the store and the binary.

use core::fmt;
use std::io;

use crate::board::{Color, Position};
use crate::codec::SaveError;
use crate::command::CommandError;
use crate::direction::Direction;
use crate::engine::EngineError;

/// Steps a move command goes through within one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No command in flight.
    Idle,
    /// Parsing arguments and checking them against the position.
    Validating,
    /// The engine is applying the move.
    Applying,
    /// State has been handed to the save file.
    Persisted,
}

/// Any failure surfaced to the top level.
#[derive(Debug)]
pub enum GameError {
    /// Malformed command token.
    Format(CommandError),
    /// Wrong number of move arguments.
    Arity { expected: usize, found: usize },
    /// The addressed slot is empty.
    NoPiece(Position),
    /// The addressed piece belongs to the side not on turn.
    WrongTurn { piece: Color, to_move: Color },
    /// The engine refuses the step.
    IllegalMove { from: Position, direction: Direction },
    /// The engine failed while applying the move.
    Engine(EngineError),
    /// The save file violates the line format.
    CorruptSave(SaveError),
    /// Reading or writing the save file failed.
    Io(io::Error),
}

impl GameError {
    /// Phase of the move command in which this error arises. Save file
    /// failures are attributed to persistence whether they occur while
    /// loading or saving.
    pub fn phase(&self) -> Phase {
        match self {
            GameError::Arity { .. } => Phase::Idle,
            GameError::Format(_)
            | GameError::NoPiece(_)
            | GameError::WrongTurn { .. }
            | GameError::IllegalMove { .. } => Phase::Validating,
            GameError::Engine(_) => Phase::Applying,
            GameError::CorruptSave(_) | GameError::Io(_) => Phase::Persisted,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Format(e) => write!(f, "{}", e),
            GameError::Arity { expected, found } => write!(
                f,
                "move takes {} arguments (coordinate, direction, same-direction flag), got {}",
                expected, found
            ),
            GameError::NoPiece(pos) => write!(f, "No piece at {}", pos),
            GameError::WrongTurn { piece, to_move } => write!(
                f,
                "Can't play a {} piece, it is {}'s turn",
                piece, to_move
            ),
            GameError::IllegalMove { from, direction } => {
                write!(f, "Piece at {} can't move {}", from, direction)
            }
            GameError::Engine(e) => write!(f, "Engine error: {}", e),
            GameError::CorruptSave(e) => write!(f, "Corrupt save file: {}", e),
            GameError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

// Every variant's `Display` already carries the inner message, so no
// source is exposed and reports stay on one line.
impl std::error::Error for GameError {}

impl From<CommandError> for GameError {
    fn from(err: CommandError) -> Self {
        GameError::Format(err)
    }
}

impl From<EngineError> for GameError {
    fn from(err: EngineError) -> Self {
        GameError::Engine(err)
    }
}

impl From<SaveError> for GameError {
    fn from(err: SaveError) -> Self {
        GameError::CorruptSave(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}
