use std::cell::Cell;

use fanorona::{
    Board, Color, Direction, Engine, EngineError, GameError, MoveOutcome, Phase, Piece, Position,
    Session, Turn,
};

/// Scripted engine: answers `can_move` with a fixed verdict and, when asked
/// to apply, either steps the piece or scribbles on the board and fails.
struct FakeEngine {
    movable: bool,
    fail_apply: bool,
    winner: Option<Color>,
    applied: Cell<usize>,
}

impl FakeEngine {
    fn new() -> Self {
        Self {
            movable: true,
            fail_apply: false,
            winner: None,
            applied: Cell::new(0),
        }
    }
}

impl Engine for FakeEngine {
    fn fresh_board(&self) -> Board {
        let mut board = Board::empty();
        board.place(pos(1, 1), Piece::new(Color::White));
        board.place(pos(5, 5), Piece::new(Color::Black));
        board
    }

    fn can_move(&self, _board: &Board, _from: Position, _direction: Direction) -> bool {
        self.movable
    }

    fn apply_move(
        &self,
        board: &mut Board,
        from: Position,
        direction: Direction,
        _same_direction: bool,
    ) -> Result<MoveOutcome, EngineError> {
        self.applied.set(self.applied.get() + 1);
        if self.fail_apply {
            board.take(from);
            return Err(EngineError::Other("scripted failure".to_string()));
        }
        let to = from.step(direction).ok_or(EngineError::NoLine { from, direction })?;
        let piece = board.take(from).ok_or(EngineError::NoPiece(from))?;
        board.place(to, piece);
        Ok(MoveOutcome {
            to: Some(to),
            captured: 0,
        })
    }

    fn check_win(&self, _board: &Board) -> Option<Color> {
        self.winner
    }
}

/// Position from 1-based command coordinates.
fn pos(h: usize, v: usize) -> Position {
    Position::new(h - 1, v - 1).unwrap()
}

#[test]
fn test_move_advances_turn() {
    let engine = FakeEngine::new();
    let mut session = Session::fresh(&engine);
    assert_eq!(session.turn(), Turn::FIRST);

    let outcome = session.play(&engine, &["1,1", "North", "y"]).unwrap();
    assert_eq!(outcome.to, Some(pos(1, 2)));
    assert_eq!(session.turn().get(), 2);
    assert_eq!(session.board().slot(pos(1, 2)), Some(Piece::new(Color::White)));
    assert!(session.board().is_empty_at(pos(1, 1)));

    session.play(&engine, &["5,5", "South", "no"]).unwrap();
    assert_eq!(session.turn().get(), 3);
    assert_eq!(engine.applied.get(), 2);
}

#[test]
fn test_arity_checked_before_anything_else() {
    let engine = FakeEngine::new();
    let mut session = Session::fresh(&engine);
    let before = session.clone();

    for args in [&["1,1", "North"][..], &["1,1", "North", "y", "extra"][..], &[][..]] {
        let err = session.play(&engine, args).unwrap_err();
        assert!(matches!(
            err,
            GameError::Arity { expected: 3, found } if found == args.len()
        ));
        assert_eq!(err.phase(), Phase::Idle);
    }
    assert_eq!(session, before);
    assert_eq!(engine.applied.get(), 0);
}

#[test]
fn test_empty_slot_is_no_piece() {
    let engine = FakeEngine::new();
    let mut session = Session::fresh(&engine);
    let err = session.play(&engine, &["3,3", "East", "y"]).unwrap_err();
    assert!(matches!(err, GameError::NoPiece(p) if p == pos(3, 3)));
    assert_eq!(err.phase(), Phase::Validating);
    assert_eq!(session.turn(), Turn::FIRST);
}

#[test]
fn test_opponent_piece_is_wrong_turn() {
    let engine = FakeEngine::new();
    let mut session = Session::fresh(&engine);
    let err = session.play(&engine, &["5,5", "South", "y"]).unwrap_err();
    assert!(matches!(
        err,
        GameError::WrongTurn {
            piece: Color::Black,
            to_move: Color::White
        }
    ));
    assert_eq!(session.turn(), Turn::FIRST);
    assert_eq!(engine.applied.get(), 0);
}

#[test]
fn test_engine_refusal_is_illegal_move() {
    let engine = FakeEngine {
        movable: false,
        ..FakeEngine::new()
    };
    let mut session = Session::fresh(&engine);
    let before = session.clone();
    let err = session.play(&engine, &["1,1", "North", "y"]).unwrap_err();
    assert!(matches!(
        err,
        GameError::IllegalMove {
            direction: Direction::North,
            ..
        }
    ));
    assert_eq!(session, before);
    assert_eq!(engine.applied.get(), 0);
}

#[test]
fn test_parse_errors_come_before_board_checks() {
    let engine = FakeEngine::new();
    let mut session = Session::fresh(&engine);
    // Empty slot and a bad flag: the parse failure wins.
    let err = session.play(&engine, &["3,3", "East", "maybe"]).unwrap_err();
    assert!(matches!(err, GameError::Format(_)));
    assert_eq!(err.phase(), Phase::Validating);
}

#[test]
fn test_engine_failure_leaves_session_untouched() {
    let engine = FakeEngine {
        fail_apply: true,
        ..FakeEngine::new()
    };
    let mut session = Session::fresh(&engine);
    let before = session.clone();
    let err = session.play(&engine, &["1,1", "North", "y"]).unwrap_err();
    assert!(matches!(err, GameError::Engine(EngineError::Other(_))));
    assert_eq!(err.phase(), Phase::Applying);
    assert_eq!(session, before);
    assert_eq!(engine.applied.get(), 1);
}

#[test]
fn test_turn_parity_alternates_colors() {
    for t in 1..200u64 {
        let turn = Turn::new(t).unwrap();
        assert_eq!(turn.is_black_turn(), t % 2 == 0);
        assert_eq!(turn.active_color().is_black(), t % 2 == 0);
    }
}

#[test]
fn test_winner_does_not_block_play() {
    let engine = FakeEngine {
        winner: Some(Color::Black),
        ..FakeEngine::new()
    };
    let mut session = Session::fresh(&engine);
    assert_eq!(session.winner(&engine), Some(Color::Black));
    session.play(&engine, &["1,1", "East", "true"]).unwrap();
    assert_eq!(session.turn().get(), 2);
}
