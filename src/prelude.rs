//! Commonly used types and utilities for ease of import.

pub use crate::{
    parse_coord, Board, BoardError, Coord, Direction, Game, GameStatus, GuessResult, Occupancy,
};

#[cfg(feature = "std")]
pub use crate::{take_turn, AiPlayer, CliPlayer, Player};
