//! Hit chains: the computer's memory of where a partly-hit ship must continue.
//!
//! Ships are straight segments of at least two cells, so once a cell is hit
//! the rest of that ship lies along one of the four axes through it. Every
//! confirmed hit on a chain-tracking board leaves fragments pointing at the
//! unexplored neighbours, and each fragment is queued on the board as a
//! [`ChainEnd`]. A second colinear hit confirms the axis and prunes the
//! perpendicular guesses.

use alloc::vec::Vec;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::board::Board;
use crate::common::Coord;
use crate::ship::Direction;

/// An unexplored frontier extending from a hit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainFragment {
    end: Direction,
}

impl ChainFragment {
    pub fn new(end: Direction) -> Self {
        Self { end }
    }

    /// Direction this fragment extends towards.
    pub fn end(&self) -> Direction {
        self.end
    }
}

/// Queued candidate target: the cell one step from `anchor` towards `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEnd {
    anchor: Coord,
    end: Direction,
}

impl ChainEnd {
    pub fn new(anchor: Coord, end: Direction) -> Self {
        Self { anchor, end }
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn end(&self) -> Direction {
        self.end
    }

    /// The cell this end proposes to shoot, or `None` if it runs off the board.
    pub fn candidate(&self) -> Option<Coord> {
        self.end.step(self.anchor)
    }
}

impl Board {
    /// Update chain bookkeeping for a freshly confirmed hit at `at`.
    pub(crate) fn record_chain_hit<R: Rng + ?Sized>(&mut self, at: Coord, rng: &mut R) {
        let was_in_chain = self.cells[at.0][at.1].in_chain;
        let mut extended = false;

        for dir in Direction::ALL {
            let Some(neighbour) = dir.step(at) else {
                continue;
            };
            let away = dir.opposite();
            let next = &self.cells[neighbour.0][neighbour.1];
            if !next.in_chain || next.fragment(away).is_none() {
                continue;
            }

            let [side_a, side_b] = dir.perpendicular();
            let before = self.chain_ends.len();
            self.chain_ends.retain(|e| {
                let anchored_here = e.anchor == at || e.anchor == neighbour;
                !(anchored_here && (e.end == side_a || e.end == side_b))
            });
            debug!(
                "hit at {:?} extends chain from {:?} towards {}, pruned {} side ends",
                at,
                neighbour,
                away,
                before - self.chain_ends.len()
            );

            let cell = &mut self.cells[at.0][at.1];
            cell.chain_links[away.index()] = Some(ChainFragment::new(away));
            cell.in_chain = true;
            extended = true;
        }

        let cell = &mut self.cells[at.0][at.1];
        let ends: Vec<ChainEnd> = if !extended && !was_in_chain {
            let mut dirs = Direction::ALL;
            dirs.shuffle(rng);
            for dir in dirs {
                cell.chain_links[dir.index()] = Some(ChainFragment::new(dir));
            }
            cell.in_chain = true;
            debug!("fresh hit at {:?}, probing {:?}", at, dirs);
            dirs.into_iter().map(|dir| ChainEnd::new(at, dir)).collect()
        } else {
            cell.fragments()
                .map(|frag| ChainEnd::new(at, frag.end()))
                .collect()
        };
        self.chain_ends.extend(ends);
    }
}
