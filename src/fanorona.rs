//! Fanorona rules on the 9×5 grid.
//!
//! Orthogonal lines join every pair of neighbouring points; diagonal lines
//! only pass through strong points (`h + v` even). A piece steps one point
//! along a line onto an empty point, then captures by approach (the ray
//! continues past the destination) or by withdrawal (the ray runs backwards
//! from the origin). Multi-step capture chains are not played.

use crate::board::{Board, Color, Piece, Position, Slot};
use crate::config::{HORIZONTAL, VERTICAL};
use crate::direction::Direction;
use crate::engine::{Engine, EngineError, MoveOutcome};

const W: Slot = Some(Piece::new(Color::White));
const B: Slot = Some(Piece::new(Color::Black));

/// Middle row of the opening layout, indexed by `h`. Alternation runs
/// straight across the empty centre.
const MIDDLE_ROW: [Slot; HORIZONTAL] = [W, B, W, B, None, W, B, W, B];
const MIDDLE_V: usize = VERTICAL / 2;

/// Standard Fanorona engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fanorona;

impl Fanorona {
    pub fn new() -> Self {
        Self
    }

    /// Destination of a one-point step, or why the step is impossible.
    fn destination(
        &self,
        board: &Board,
        from: Position,
        direction: Direction,
    ) -> Result<Position, EngineError> {
        let no_line = EngineError::NoLine { from, direction };
        if direction == Direction::Identity || (direction.is_diagonal() && !from.is_strong()) {
            return Err(no_line);
        }
        let to = from.step(direction).ok_or(no_line)?;
        if !board.is_empty_at(to) {
            return Err(EngineError::Blocked(to));
        }
        Ok(to)
    }

    /// Remove consecutive `victim` pieces starting at `start` and walking
    /// towards `ray`.
    fn capture_ray(
        board: &mut Board,
        start: Option<Position>,
        ray: Direction,
        victim: Color,
    ) -> usize {
        let mut captured = 0;
        let mut cursor = start;
        while let Some(pos) = cursor {
            match board.slot(pos) {
                Some(piece) if piece.color == victim => {
                    board.take(pos);
                    captured += 1;
                    cursor = pos.step(ray);
                }
                _ => break,
            }
        }
        captured
    }
}

impl Engine for Fanorona {
    fn fresh_board(&self) -> Board {
        let mut board = Board::empty();
        for pos in Position::all() {
            let slot = match pos.v() {
                v if v < MIDDLE_V => W,
                v if v > MIDDLE_V => B,
                _ => MIDDLE_ROW[pos.h()],
            };
            if let Some(piece) = slot {
                board.place(pos, piece);
            }
        }
        board
    }

    fn can_move(&self, board: &Board, from: Position, direction: Direction) -> bool {
        board.slot(from).is_some() && self.destination(board, from, direction).is_ok()
    }

    fn apply_move(
        &self,
        board: &mut Board,
        from: Position,
        direction: Direction,
        same_direction: bool,
    ) -> Result<MoveOutcome, EngineError> {
        let piece = board.slot(from).ok_or(EngineError::NoPiece(from))?;
        let to = self.destination(board, from, direction)?;

        board.take(from);
        board.place(to, piece);

        let (start, ray) = if same_direction {
            (to.step(direction), direction)
        } else {
            (from.step(-direction), -direction)
        };
        let captured = Self::capture_ray(board, start, ray, piece.color.opponent());
        log::debug!(
            "{} moved {} -> {}, captured {}",
            piece.color,
            from,
            to,
            captured
        );
        Ok(MoveOutcome {
            to: Some(to),
            captured,
        })
    }

    fn check_win(&self, board: &Board) -> Option<Color> {
        match (board.count(Color::Black), board.count(Color::White)) {
            (0, 0) => None,
            (0, _) => Some(Color::White),
            (_, 0) => Some(Color::Black),
            _ => None,
        }
    }
}
