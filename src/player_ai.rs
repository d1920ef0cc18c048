use rand::rngs::SmallRng;

use crate::{
    ai,
    board::Board,
    common::Coord,
    player::Player,
};

/// Computer player: random fleet placement, hunt-then-follow-chain targeting.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        ai::place_fleet(board, rng)?;
        Ok(())
    }

    fn select_target(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<Coord> {
        Ok(ai::choose_target(board, rng))
    }
}
