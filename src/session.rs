//! Turn counter and the per-invocation move state machine.
//!
//! A move runs `Idle -> Validating -> Applying` and the caller persists the
//! result. Validation checks, in order: argument count, token parsing, an
//! occupied origin, the turn parity, and the engine's `can_move`. The engine
//! works on a scratch copy of the board, so a failed move leaves the session
//! exactly as it was.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};
use crate::command::MoveCommand;
use crate::common::{GameError, Phase};
use crate::engine::{Engine, MoveOutcome};

/// Number of positional arguments of `move`.
pub const MOVE_ARITY: usize = 3;

/// One-based turn counter. Even turns are black's, odd turns white's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Turn(u64);

impl Turn {
    pub const FIRST: Turn = Turn(1);

    /// Returns `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_black_turn(self) -> bool {
        self.0 % 2 == 0
    }

    /// Side expected to move on this turn.
    pub fn active_color(self) -> Color {
        if self.is_black_turn() {
            Color::Black
        } else {
            Color::White
        }
    }

    /// The following turn. Saturates at `u64::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Turn {
    fn default() -> Self {
        Turn::FIRST
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything that persists between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    turn: Turn,
    board: Board,
}

impl Session {
    pub fn new(turn: Turn, board: Board) -> Self {
        Self { turn, board }
    }

    /// New game on the engine's starting layout.
    pub fn fresh<E: Engine>(engine: &E) -> Self {
        Self::new(Turn::FIRST, engine.fresh_board())
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.turn.active_color()
    }

    /// Winner according to the engine. Play is not blocked by a decided game.
    pub fn winner<E: Engine>(&self, engine: &E) -> Option<Color> {
        engine.check_win(&self.board)
    }

    /// Run the `Validating` phase on raw `move` arguments.
    pub fn validate<E, S>(&self, engine: &E, args: &[S]) -> Result<MoveCommand, GameError>
    where
        E: Engine,
        S: AsRef<str>,
    {
        let [coordinate, direction, same] = args else {
            return Err(GameError::Arity {
                expected: MOVE_ARITY,
                found: args.len(),
            });
        };
        log::debug!("{:?}: turn {}", Phase::Validating, self.turn);

        let cmd = MoveCommand::parse(coordinate.as_ref(), direction.as_ref(), same.as_ref())?;
        let piece = self
            .board
            .slot(cmd.from)
            .ok_or(GameError::NoPiece(cmd.from))?;
        let to_move = self.active_color();
        if piece.color != to_move {
            return Err(GameError::WrongTurn {
                piece: piece.color,
                to_move,
            });
        }
        if !engine.can_move(&self.board, cmd.from, cmd.direction) {
            return Err(GameError::IllegalMove {
                from: cmd.from,
                direction: cmd.direction,
            });
        }
        Ok(cmd)
    }

    /// Run the `Applying` phase for an already validated command and advance
    /// the turn on success.
    pub fn apply<E: Engine>(
        &mut self,
        engine: &E,
        cmd: MoveCommand,
    ) -> Result<MoveOutcome, GameError> {
        log::debug!("{:?}: {:?}", Phase::Applying, cmd);
        let mut next = self.board.clone();
        let outcome = engine.apply_move(&mut next, cmd.from, cmd.direction, cmd.same_direction)?;
        self.board = next;
        self.turn = self.turn.next();
        Ok(outcome)
    }

    /// Validate and apply one `move` command.
    pub fn play<E, S>(&mut self, engine: &E, args: &[S]) -> Result<MoveOutcome, GameError>
    where
        E: Engine,
        S: AsRef<str>,
    {
        let cmd = self.validate(engine, args)?;
        self.apply(engine, cmd)
    }
}
