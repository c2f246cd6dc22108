//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable reporting without coupling the training loop to
//! specific output formats.

use crate::{
    Result,
    hexapawn::{MoveRecord, Victory},
    types::Relocation,
};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - once
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - for each move, either side
///    - `on_prune(...)` - only after a lost game that pruned a candidate
///    - `on_game_end(game_num, outcome)`
/// 3. `on_training_end()` - once
///
/// # Examples
///
/// ```no_run
/// use hexapawn::{hexapawn::{Side, Victory}, ports::Observer};
///
/// struct LossCounter {
///     losses: usize,
/// }
///
/// impl Observer for LossCounter {
///     fn on_game_end(&mut self, _game_num: usize, outcome: Victory) -> hexapawn::Result<()> {
///         if outcome.winner == Side::H {
///             self.losses += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts (`game_num` is 0-based).
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each move is applied to the board.
    fn on_move(&mut self, _game_num: usize, _step_num: usize, _record: &MoveRecord) -> Result<()> {
        Ok(())
    }

    /// Called when a lost game removed `relocation` from the engine's table.
    fn on_prune(&mut self, _game_num: usize, _relocation: Relocation) -> Result<()> {
        Ok(())
    }

    /// Called when a game is decided.
    fn on_game_end(&mut self, _game_num: usize, _outcome: Victory) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
