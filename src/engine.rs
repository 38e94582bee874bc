//! Capability contract of the board engine.
//!
//! The session only asks these questions and never inspects movement or
//! capture rules itself, so tests can substitute a scripted engine.

use core::fmt;

use crate::board::{Board, Color, Position};
use crate::direction::Direction;

/// Failure reported by an engine while applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No piece stands on the origin.
    NoPiece(Position),
    /// The step leaves the grid or does not follow a line.
    NoLine { from: Position, direction: Direction },
    /// The destination is occupied.
    Blocked(Position),
    /// Engine-specific failure.
    Other(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoPiece(pos) => write!(f, "no piece at {}", pos),
            EngineError::NoLine { from, direction } => {
                write!(f, "no line from {} towards {}", from, direction)
            }
            EngineError::Blocked(pos) => write!(f, "destination {} is occupied", pos),
            EngineError::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for EngineError {}

/// Outcome of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Where the moved piece now stands.
    pub to: Option<Position>,
    /// Number of opponent pieces removed.
    pub captured: usize,
}

/// Board engine: adjacency, legality, capture and termination rules.
pub trait Engine {
    /// Standard starting occupancy.
    fn fresh_board(&self) -> Board;

    /// Whether the piece on `from` is physically able to step towards `direction`.
    fn can_move(&self, board: &Board, from: Position, direction: Direction) -> bool;

    /// Move the piece on `from` and resolve captures. On error the board must
    /// be left untouched.
    fn apply_move(
        &self,
        board: &mut Board,
        from: Position,
        direction: Direction,
        same_direction: bool,
    ) -> Result<MoveOutcome, EngineError>;

    /// The winning side, if the game is decided.
    fn check_win(&self, board: &Board) -> Option<Color>;
}
