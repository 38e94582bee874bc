//! Compass directions and their grid offsets.
//!
//! North increases `v`, east increases `h`. The identity direction has a zero
//! offset and exists so that an empty direction token stays representable.

use core::fmt;
use core::ops::Neg;
use serde::{Deserialize, Serialize};

/// One of the eight compass directions, or the identity direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Identity,
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

/// Name table used by the command parser. Keys are compared ignoring ASCII case.
const NAMES: [(&str, Direction); 9] = [
    ("", Direction::Identity),
    ("North", Direction::North),
    ("South", Direction::South),
    ("East", Direction::East),
    ("West", Direction::West),
    ("Northeast", Direction::Northeast),
    ("Northwest", Direction::Northwest),
    ("Southeast", Direction::Southeast),
    ("Southwest", Direction::Southwest),
];

impl Direction {
    /// Every direction, identity first.
    pub const ALL: [Direction; 9] = [
        Direction::Identity,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
    ];

    /// Grid offset `(dh, dv)` of a single step.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Identity => (0, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Northeast => (1, 1),
            Direction::Northwest => (-1, 1),
            Direction::Southeast => (1, -1),
            Direction::Southwest => (-1, -1),
        }
    }

    /// Canonical name as it appears in the name table.
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, d)| *d == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }

    /// Case-insensitive lookup in the name table.
    pub fn from_name(name: &str) -> Option<Direction> {
        NAMES
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, d)| *d)
    }

    /// `true` for the four diagonal directions.
    pub fn is_diagonal(self) -> bool {
        let (dh, dv) = self.offset();
        dh != 0 && dv != 0
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Identity => Direction::Identity,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Northeast => Direction::Southwest,
            Direction::Northwest => Direction::Southeast,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Identity => f.write_str("Identity"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_direction_has_a_table_entry() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_name(dir.name()), Some(dir));
        }
    }

    #[test]
    fn negation_reverses_offset() {
        for dir in Direction::ALL {
            let (dh, dv) = dir.offset();
            assert_eq!((-dir).offset(), (-dh, -dv));
        }
    }
}
