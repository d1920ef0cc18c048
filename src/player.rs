use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coord, GuessResult},
    game::fire_until_accepted,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Place all ships onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()>;

    /// Choose the next cell to fire at on the opponent's `board`.
    fn select_target(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, _coord: Coord, _result: GuessResult) {}

    /// Inform the player that its chosen cell could not be shot.
    fn handle_rejected_target(&mut self, _coord: Coord, _err: BoardError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _result: GuessResult) {}
}

/// Ask `player` for targets until one lands on `target`, then report the
/// result back to it.
pub fn take_turn(
    player: &mut dyn Player,
    target: &mut Board,
    rng: &mut SmallRng,
) -> anyhow::Result<(Coord, GuessResult)> {
    let (coord, result) = fire_until_accepted(target, rng, |board, rng, rejected| {
        if let Some((coord, err)) = rejected {
            player.handle_rejected_target(coord, err);
        }
        player.select_target(rng, board)
    })?;
    player.handle_guess_result(coord, result);
    Ok((coord, result))
}
