//! Game board state: per-cell occupancy, placement legality and shot resolution.

use alloc::vec::Vec;
use core::fmt;

use log::{info, trace};
use rand::Rng;

use crate::chain::{ChainEnd, ChainFragment};
use crate::common::{BoardError, Coord, GuessResult};
use crate::config::{BOARD_SIZE, TOTAL_SHIP_CELLS};
use crate::ship::Direction;

/// What currently occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    /// Transient marker showing candidate orientations while a ship is being
    /// placed.
    OrientationPreview,
}

impl Occupancy {
    /// `true` once a shot has landed here.
    pub fn is_resolved(self) -> bool {
        matches!(self, Occupancy::Hit | Occupancy::Miss)
    }
}

/// Read-only grid of occupancies handed to renderers.
pub type Snapshot = [[Occupancy; BOARD_SIZE]; BOARD_SIZE];

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub(crate) occupancy: Occupancy,
    /// Chain fragments indexed by [`Direction::index`].
    pub(crate) chain_links: [Option<ChainFragment>; 4],
    pub(crate) in_chain: bool,
}

impl Cell {
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    /// Whether this cell has ever anchored a chain fragment.
    pub fn is_in_chain(&self) -> bool {
        self.in_chain
    }

    /// The fragment extending towards `dir`, if any.
    pub fn fragment(&self, dir: Direction) -> Option<ChainFragment> {
        self.chain_links[dir.index()]
    }

    /// All fragments on this cell, in [`Direction::ALL`] order.
    pub fn fragments(&self) -> impl Iterator<Item = ChainFragment> + '_ {
        self.chain_links.iter().flatten().copied()
    }
}

/// One player's 8×8 side of the ocean.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Candidate targets for the computer, most recent last.
    pub(crate) chain_ends: Vec<ChainEnd>,
    ship_count: usize,
    computer_owned: bool,
}

impl Board {
    /// Create an empty board. Human-owned boards track hit chains; computer
    /// boards hide their ships from snapshots.
    pub fn new(computer_owned: bool) -> Self {
        Board {
            cells: [[Cell::default(); BOARD_SIZE]; BOARD_SIZE],
            chain_ends: Vec::new(),
            ship_count: TOTAL_SHIP_CELLS,
            computer_owned,
        }
    }

    /// Board belonging to the human player, attacked by the computer.
    pub fn human() -> Self {
        Self::new(false)
    }

    /// Board belonging to the computer, attacked by the human.
    pub fn computer() -> Self {
        Self::new(true)
    }

    pub fn is_computer_owned(&self) -> bool {
        self.computer_owned
    }

    /// Chain bookkeeping only runs on the board the computer is hunting.
    pub fn tracks_chains(&self) -> bool {
        !self.computer_owned
    }

    /// Remaining un-hit ship cells.
    pub fn ship_count(&self) -> usize {
        self.ship_count
    }

    /// Returns `true` once every ship cell has been hit.
    pub fn is_defeated(&self) -> bool {
        self.ship_count == 0
    }

    /// Whether any cell can still be shot.
    pub fn has_open_cell(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| !cell.occupancy.is_resolved())
    }

    /// Cell at `coord`.
    pub fn cell(&self, (row, col): Coord) -> Result<&Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(BoardError::OutOfBounds)
    }

    pub fn occupancy(&self, coord: Coord) -> Result<Occupancy, BoardError> {
        self.cell(coord).map(Cell::occupancy)
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, occupancy: Occupancy) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.occupancy == occupancy)
            .count()
    }

    /// Queued chain ends, oldest first.
    pub fn chain_ends(&self) -> &[ChainEnd] {
        &self.chain_ends
    }

    /// Directions in which a ship of `length` starting at `start` stays on the
    /// board and covers only empty cells.
    pub fn find_legitimate_directions(
        &self,
        start: Coord,
        length: usize,
    ) -> Result<Vec<Direction>, BoardError> {
        self.cell(start)?;
        let dirs: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| self.run_is_empty(start, dir, length))
            .collect();
        if dirs.is_empty() {
            return Err(BoardError::NoValidOrientation);
        }
        Ok(dirs)
    }

    fn run_is_empty(&self, start: Coord, dir: Direction, length: usize) -> bool {
        (0..length).all(|i| {
            dir.walk(start, i)
                .map(|(r, c)| self.cells[r][c].occupancy == Occupancy::Empty)
                .unwrap_or(false)
        })
    }

    /// Mark the start cell and every candidate orientation with
    /// [`Occupancy::OrientationPreview`]. Only empty cells are marked.
    pub fn preview_directions(
        &mut self,
        start: Coord,
        dirs: &[Direction],
        length: usize,
    ) -> Result<(), BoardError> {
        self.cell(start)?;
        self.clear_preview();
        for &dir in dirs {
            for (r, c) in (0..length).filter_map(|i| dir.walk(start, i)) {
                let cell = &mut self.cells[r][c];
                if cell.occupancy == Occupancy::Empty {
                    cell.occupancy = Occupancy::OrientationPreview;
                }
            }
        }
        Ok(())
    }

    /// Revert all preview markers to empty water.
    pub fn clear_preview(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.occupancy == Occupancy::OrientationPreview {
                cell.occupancy = Occupancy::Empty;
            }
        }
    }

    /// Lay a ship of `length` from `start` towards `dir`. The direction must be
    /// one of [`Board::find_legitimate_directions`] for the same arguments.
    pub fn commit_placement(
        &mut self,
        start: Coord,
        dir: Direction,
        length: usize,
    ) -> Result<(), BoardError> {
        self.clear_preview();
        let legitimate = match self.find_legitimate_directions(start, length) {
            Ok(dirs) => dirs,
            Err(BoardError::NoValidOrientation) => return Err(BoardError::InvalidDirection),
            Err(e) => return Err(e),
        };
        if !legitimate.contains(&dir) {
            return Err(BoardError::InvalidDirection);
        }
        for (r, c) in (0..length).filter_map(|i| dir.walk(start, i)) {
            self.cells[r][c].occupancy = Occupancy::Ship;
        }
        trace!("placed length {} ship at {:?} towards {}", length, start, dir);
        Ok(())
    }

    /// Fire at `target`. Hits on a chain-tracking board update the computer's
    /// hunting memory, shuffling fresh fragments with `rng`.
    pub fn apply_shot<R: Rng + ?Sized>(
        &mut self,
        target: Coord,
        rng: &mut R,
    ) -> Result<GuessResult, BoardError> {
        let (row, col) = target;
        self.cell(target)?;
        let cell = &mut self.cells[row][col];
        let result = match cell.occupancy {
            Occupancy::Hit | Occupancy::Miss => return Err(BoardError::AlreadyGuessed),
            Occupancy::Ship => {
                cell.occupancy = Occupancy::Hit;
                self.ship_count = self.ship_count.saturating_sub(1);
                GuessResult::Hit
            }
            Occupancy::Empty | Occupancy::OrientationPreview => {
                cell.occupancy = Occupancy::Miss;
                GuessResult::Miss
            }
        };
        if result == GuessResult::Hit && self.tracks_chains() {
            self.record_chain_hit(target, rng);
        }
        if self.is_defeated() {
            info!("last ship cell hit at {:?}", target);
        }
        Ok(result)
    }

    /// Cell states for rendering; ships stay hidden on the computer's board.
    pub fn snapshot(&self) -> Snapshot {
        let hide = self.computer_owned;
        core::array::from_fn(|r| {
            core::array::from_fn(|c| match self.cells[r][c].occupancy {
                Occupancy::Ship if hide => Occupancy::Empty,
                other => other,
            })
        })
    }

    /// Cell states with nothing hidden.
    pub fn revealed_snapshot(&self) -> Snapshot {
        core::array::from_fn(|r| core::array::from_fn(|c| self.cells[r][c].occupancy))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::human()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ computer_owned: {}, ship_count: {}, chain_ends: {:?} }}",
            self.computer_owned, self.ship_count, self.chain_ends
        )?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match cell.occupancy {
                    Occupancy::Empty => '.',
                    Occupancy::Ship => 'S',
                    Occupancy::Hit => 'X',
                    Occupancy::Miss => 'o',
                    Occupancy::OrientationPreview => '+',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
