use core::fmt::Write;

use crate::board::{Color, Piece, Position};
use crate::config::{HORIZONTAL, VERTICAL};
use crate::engine::MoveOutcome;
use crate::session::Session;

fn cell(slot: Option<Piece>) -> &'static str {
    match slot {
        None => "[ ]",
        Some(Piece { color: Color::White }) => "[W]",
        Some(Piece { color: Color::Black }) => "[B]",
    }
}

/// Text view of the session: header, rows from the top (`v = VERTICAL - 1`)
/// down, and 1-based column labels.
pub fn render(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "This is turn {}: {}'s turn",
        session.turn(),
        session.active_color()
    );
    for v in (0..VERTICAL).rev() {
        let _ = write!(out, "{} ", v + 1);
        for h in 0..HORIZONTAL {
            let slot = Position::new(h, v).and_then(|p| session.board().slot(p));
            out.push_str(cell(slot));
        }
        out.push('\n');
    }
    out.push_str("  ");
    for h in 0..HORIZONTAL {
        let _ = write!(out, " {} ", h + 1);
    }
    out.push('\n');
    out
}

/// One-line summary of an applied move.
pub fn describe_move(outcome: &MoveOutcome) -> String {
    let dest = outcome
        .to
        .map(|p| format!(" to {}", p))
        .unwrap_or_default();
    match outcome.captured {
        0 => format!("Moved{}, nothing captured", dest),
        1 => format!("Moved{}, captured 1 piece", dest),
        n => format!("Moved{}, captured {} pieces", dest, n),
    }
}

/// Announcement printed when the engine reports a winner.
pub fn announce_winner(color: Color) -> String {
    format!("The {} player has won", color)
}
