//! Common types for Broadside: board errors and guess results.

use thiserror::Error;

/// Board position as `(row, column)`, both zero-based.
pub type Coord = (usize, usize);

/// Result of a shot that was applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Shot struck a ship segment.
    Hit,
    /// Shot landed in open water.
    Miss,
}

/// Errors returned by Board operations. Every variant is recoverable by
/// choosing a different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Specified coordinate is outside the board.
    #[error("coordinate is outside the board")]
    OutOfBounds,
    /// No direction from the chosen start fits the ship.
    #[error("no valid orientation from this start")]
    NoValidOrientation,
    /// The direction is not one of the legitimate orientations for this start.
    #[error("not one of the possible directions")]
    InvalidDirection,
    /// Shot was already made at this position.
    #[error("this square has already been targeted")]
    AlreadyGuessed,
    /// Random placement gave up.
    #[error("unable to place ship")]
    UnableToPlaceShip,
    /// The board's fleet is already sunk.
    #[error("the game is already over")]
    GameOver,
    /// Every cell of the board has been shot.
    #[error("no cell left to shoot at")]
    NoTargetsLeft,
}
