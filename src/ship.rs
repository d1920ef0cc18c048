//! Ship definitions and the compass directions ships are laid along.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::coord::ParseError;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// One of the four compass directions. North is towards row 0, West towards
/// column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions in evaluation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Position of this direction within [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::East => 3,
        }
    }

    /// Row and column offset of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The two directions orthogonal to this one.
    pub fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::West, Direction::East],
            Direction::West | Direction::East => [Direction::North, Direction::South],
        }
    }

    /// Walk `distance` cells from `from`. Returns `None` when the walk leaves
    /// the board.
    pub fn walk(self, from: Coord, distance: usize) -> Option<Coord> {
        let (dr, dc) = self.delta();
        let row = from.0 as isize + dr * distance as isize;
        let col = from.1 as isize + dc * distance as isize;
        let size = BOARD_SIZE as isize;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// The adjacent cell in this direction, if on the board.
    pub fn step(self, from: Coord) -> Option<Coord> {
        self.walk(from, 1)
    }

    /// Single-letter compass abbreviation.
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::West => 'W',
            Direction::East => 'E',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::West => "West",
            Direction::East => "East",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts a compass letter or the full direction name, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|dir| {
                let mut buf = [0u8; 4];
                let letter: &str = dir.letter().encode_utf8(&mut buf);
                trimmed.eq_ignore_ascii_case(letter)
                    || trimmed.eq_ignore_ascii_case(&dir.to_string())
            })
            .ok_or_else(|| ParseError::UnknownDirection(trimmed.to_string()))
    }
}
