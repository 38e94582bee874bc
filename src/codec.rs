//! Line format of the save file.
//!
//! ```text
//! 1283_--111_00011_00111_00011_00-11_00111_00011_00111_00011
//! ```
//!
//! The first segment is the turn counter, followed by one segment per column
//! `h = 0..HORIZONTAL`, each holding `VERTICAL` cells ordered by `v`:
//! `-` empty, `0` white, `1` black. Decoding is strict, so every accepted blob
//! re-encodes to the same bytes.

use core::fmt;

use crate::board::{Board, Color, Piece, Slot};
use crate::config::{HORIZONTAL, VERTICAL};
use crate::session::{Session, Turn};

const SEPARATOR: char = '_';
const EMPTY: char = '-';
const WHITE: char = '0';
const BLACK: char = '1';

/// Reasons a save blob is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// Blob does not split into `1 + HORIZONTAL` segments.
    SegmentCount { found: usize },
    /// Turn segment is not a positive decimal without leading zeros.
    Turn(String),
    /// A column segment does not hold exactly `VERTICAL` cells.
    RowLength { row: usize, found: usize },
    /// A cell character outside `-`, `0`, `1`.
    Cell { row: usize, index: usize, found: char },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::SegmentCount { found } => write!(
                f,
                "expected {} segments in save file, found {}",
                1 + HORIZONTAL,
                found
            ),
            SaveError::Turn(raw) => write!(f, "invalid turn counter {:?}", raw),
            SaveError::RowLength { row, found } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, VERTICAL
            ),
            SaveError::Cell { row, index, found } => {
                write!(f, "row {} cell {} holds invalid character {:?}", row, index, found)
            }
        }
    }
}

impl std::error::Error for SaveError {}

fn encode_slot(slot: Slot) -> char {
    match slot {
        None => EMPTY,
        Some(Piece { color: Color::White }) => WHITE,
        Some(Piece { color: Color::Black }) => BLACK,
    }
}

fn decode_slot(ch: char) -> Option<Slot> {
    match ch {
        EMPTY => Some(None),
        WHITE => Some(Some(Piece::new(Color::White))),
        BLACK => Some(Some(Piece::new(Color::Black))),
        _ => None,
    }
}

/// Serialize a session into its save line.
pub fn encode(session: &Session) -> String {
    let mut out = session.turn().get().to_string();
    out.reserve(HORIZONTAL * (VERTICAL + 1));
    for h in 0..HORIZONTAL {
        out.push(SEPARATOR);
        out.extend(session.board().column(h).iter().map(|s| encode_slot(*s)));
    }
    out
}

fn decode_turn(raw: &str) -> Result<Turn, SaveError> {
    let err = || SaveError::Turn(raw.to_string());
    let well_formed = raw.starts_with(|c: char| matches!(c, '1'..='9'))
        && raw.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(err());
    }
    let value: u64 = raw.parse().map_err(|_| err())?;
    Turn::new(value).ok_or_else(err)
}

fn decode_row(row: usize, raw: &str) -> Result<[Slot; VERTICAL], SaveError> {
    let found = raw.chars().count();
    if found != VERTICAL {
        return Err(SaveError::RowLength { row, found });
    }
    let mut column = [None; VERTICAL];
    for (index, ch) in raw.chars().enumerate() {
        column[index] = decode_slot(ch).ok_or(SaveError::Cell {
            row,
            index,
            found: ch,
        })?;
    }
    Ok(column)
}

/// Parse a save line. Nothing is built unless the whole blob is valid.
pub fn decode(blob: &str) -> Result<Session, SaveError> {
    let segments: Vec<&str> = blob.split(SEPARATOR).collect();
    if segments.len() != 1 + HORIZONTAL {
        return Err(SaveError::SegmentCount {
            found: segments.len(),
        });
    }
    let turn = decode_turn(segments[0])?;
    let mut cells = [[None; VERTICAL]; HORIZONTAL];
    for (row, raw) in segments[1..].iter().enumerate() {
        cells[row] = decode_row(row, raw)?;
    }
    Ok(Session::new(turn, Board::from_cells(cells)))
}
