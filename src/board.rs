//! Board grid: slots addressed by `(h, v)`, each holding at most one piece.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::config::{HORIZONTAL, VERTICAL};
use crate::direction::Direction;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// A single game token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
}

impl Piece {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Content of one board cell: `None` when empty.
pub type Slot = Option<Piece>;

/// Zero-based board coordinates, always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    h: usize,
    v: usize,
}

impl Position {
    /// Returns `None` when `(h, v)` lies outside the grid.
    pub fn new(h: usize, v: usize) -> Option<Self> {
        (h < HORIZONTAL && v < VERTICAL).then_some(Self { h, v })
    }

    pub fn h(self) -> usize {
        self.h
    }

    pub fn v(self) -> usize {
        self.v
    }

    /// Neighbouring position one step towards `dir`, if it is on the grid.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dh, dv) = dir.offset();
        let h = self.h.checked_add_signed(dh)?;
        let v = self.v.checked_add_signed(dv)?;
        Position::new(h, v)
    }

    /// Strong points carry diagonal lines.
    pub fn is_strong(self) -> bool {
        (self.h + self.v) % 2 == 0
    }

    /// All positions, column by column.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..HORIZONTAL).flat_map(|h| (0..VERTICAL).map(move |v| Position { h, v }))
    }
}

impl fmt::Display for Position {
    /// Formats using the 1-based `h,v` notation of the command line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.h + 1, self.v + 1)
    }
}

/// Fixed `HORIZONTAL × VERTICAL` grid of slots.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Slot; VERTICAL]; HORIZONTAL],
}

impl Board {
    /// Board with every slot empty.
    pub fn empty() -> Self {
        Self {
            cells: [[None; VERTICAL]; HORIZONTAL],
        }
    }

    /// Build a board from a per-column grid of slots.
    pub fn from_cells(cells: [[Slot; VERTICAL]; HORIZONTAL]) -> Self {
        Self { cells }
    }

    pub fn slot(&self, pos: Position) -> Slot {
        self.cells[pos.h][pos.v]
    }

    /// Put `piece` on `pos`, returning whatever was there before.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Slot {
        self.cells[pos.h][pos.v].replace(piece)
    }

    /// Empty `pos`, returning the piece it held.
    pub fn take(&mut self, pos: Position) -> Slot {
        self.cells[pos.h][pos.v].take()
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.slot(pos).is_none()
    }

    /// Number of pieces of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|s| matches!(s, Some(p) if p.color == color))
            .count()
    }

    /// Column `h` of the grid, indexed by `v`.
    pub fn column(&self, h: usize) -> &[Slot; VERTICAL] {
        &self.cells[h]
    }

    /// Iterate over all slots with their positions, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Slot)> + '_ {
        Position::all().map(move |p| (p, self.slot(p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for column in self.cells.iter() {
            write!(f, "  ")?;
            for slot in column {
                let ch = match slot {
                    None => '-',
                    Some(Piece { color: Color::White }) => 'W',
                    Some(Piece { color: Color::Black }) => 'B',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
