use log::debug;
use rand::Rng;

use crate::{
    ai,
    board::Board,
    common::{BoardError, Coord, GuessResult},
};

/// Current status of a game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Both sides of a human-versus-computer game.
#[derive(Debug, Clone)]
pub struct Game {
    human: Board,
    computer: Board,
}

impl Game {
    /// Create a game with two empty boards.
    pub fn new() -> Self {
        Self {
            human: Board::human(),
            computer: Board::computer(),
        }
    }

    /// The human's board, which the computer attacks.
    pub fn human_board(&self) -> &Board {
        &self.human
    }

    /// Mutable reference to the human's board for ship placement.
    pub fn human_board_mut(&mut self) -> &mut Board {
        &mut self.human
    }

    /// The computer's board, which the human attacks.
    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    /// Mutable reference to the computer's board for ship placement.
    pub fn computer_board_mut(&mut self) -> &mut Board {
        &mut self.computer
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.computer.is_defeated() {
            GameStatus::Won
        } else if self.human.is_defeated() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Apply the human's shot to the computer's board.
    pub fn fire_at_computer<R: Rng + ?Sized>(
        &mut self,
        target: Coord,
        rng: &mut R,
    ) -> Result<GuessResult, BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        self.computer.apply_shot(target, rng)
    }

    /// Let the computer pick and fire its shot at the human's board, returning
    /// the chosen cell and the outcome.
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coord, GuessResult), BoardError> {
        if self.status() != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        fire_until_accepted(&mut self.human, rng, |board, rng, rejected| {
            if let Some((coord, _)) = rejected {
                debug!("computer resampling, {:?} already shot", coord);
            }
            Ok(ai::choose_target(board, rng))
        })
    }
}

/// Shoot at `board` with targets from `pick` until one lands on an open cell.
///
/// `pick` is told about the previous rejected target, if any. Fails with
/// `GameOver` on a sunk fleet and `NoTargetsLeft` once every cell is resolved,
/// so the loop only runs while some shot can still succeed.
pub fn fire_until_accepted<R, E, P>(
    board: &mut Board,
    rng: &mut R,
    mut pick: P,
) -> Result<(Coord, GuessResult), E>
where
    R: Rng + ?Sized,
    E: From<BoardError>,
    P: FnMut(&mut Board, &mut R, Option<(Coord, BoardError)>) -> Result<Coord, E>,
{
    if board.is_defeated() {
        return Err(BoardError::GameOver.into());
    }
    if !board.has_open_cell() {
        return Err(BoardError::NoTargetsLeft.into());
    }
    let mut rejected = None;
    loop {
        let target = pick(board, rng, rejected.take())?;
        match board.apply_shot(target, rng) {
            Ok(result) => return Ok((target, result)),
            Err(err @ (BoardError::AlreadyGuessed | BoardError::OutOfBounds)) => {
                rejected = Some((target, err));
            }
            Err(err) => return Err(err.into()),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
