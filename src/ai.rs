// Computer strategy: random fleet placement and hunt-then-follow-chain targeting.
// Uses no_std and only allocates through the board.

use log::trace;
use rand::{seq::IndexedRandom, Rng};

use crate::{
    board::Board,
    common::{BoardError, Coord},
    config::{BOARD_SIZE, SHIPS},
    ship::Direction,
};

/// Start cells sampled before random placement gives up on a ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// A uniformly random cell. May already have been shot.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R) -> Coord {
    (
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    )
}

/// Returns a random start and one of its legitimate directions for a ship of
/// `length`, resampling the start whenever no direction fits.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    length: usize,
) -> Result<(Coord, Direction), BoardError> {
    for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
        let start = random_cell(rng);
        match board.find_legitimate_directions(start, length) {
            Ok(dirs) => {
                let dir = *dirs.choose(rng).ok_or(BoardError::NoValidOrientation)?;
                return Ok((start, dir));
            }
            Err(BoardError::NoValidOrientation) => {
                trace!("attempt {}: no room for length {} at {:?}", attempt, length, start);
            }
            Err(e) => return Err(e),
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

/// Place the whole catalog, in order, at random positions.
pub fn place_fleet<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    for def in SHIPS.iter() {
        let (start, dir) = random_placement(board, rng, def.length())?;
        board.commit_placement(start, dir, def.length())?;
    }
    Ok(())
}

/// Pick the computer's next shot against `board`.
///
/// Follows the most recently queued chain end whose next cell is still open,
/// discarding ends that run off the board or into a resolved cell. With no
/// chain ends left, falls back to a random cell; the caller retries if that
/// cell was already shot.
pub fn choose_target<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Coord {
    while let Some(end) = board.chain_ends.last().copied() {
        let open = end
            .candidate()
            .filter(|&(r, c)| !board.cells[r][c].occupancy.is_resolved());
        match open {
            Some(target) => return target,
            None => {
                trace!("dropping exhausted chain end {:?}", end);
                board.chain_ends.pop();
            }
        }
    }
    random_cell(rng)
}
