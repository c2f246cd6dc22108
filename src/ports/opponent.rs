//! Opponent port - whoever plays side H against the engine

use crate::{hexapawn::Board, types::Relocation};

/// Chooses H's moves during training and evaluation.
///
/// Implementations receive the live board with H to move and return one of
/// H's legal moves, or `None` if they have nothing to play.
pub trait Opponent {
    fn choose(&mut self, board: &Board) -> Option<Relocation>;

    /// Display name for reports.
    fn name(&self) -> &str;

    /// Reseed any internal randomness. Default does nothing.
    fn set_seed(&mut self, _seed: u64) {}

    /// Called before each game. Default does nothing.
    fn reset(&mut self) {}
}
