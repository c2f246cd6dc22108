//! Training pipeline: repeated games with pruning after every loss

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    engine::DecisionEngine,
    hexapawn::{Game, Side, Victory},
    ports::{Observer, Opponent},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training games
    pub num_games: usize,

    /// Random seed for engine and opponent
    pub seed: Option<u64>,

    /// Size of the trailing window reported in `TrainingResult::recent_losses`
    pub window: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
            window: 20,
        }
    }
}

/// Result of a training run, from the engine's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Candidates removed from the table during the run
    pub pruned: usize,
    /// Losses among the last `window` games
    pub recent_losses: usize,
    /// Index of the last lost game, if any
    pub last_loss: Option<usize>,
}

impl TrainingResult {
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Plays the engine (side A) against an opponent (side H) repeatedly.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run `num_games` games. After each game H wins, the engine's last
    /// choice is pruned.
    pub fn run(
        &mut self,
        engine: &mut DecisionEngine,
        opponent: &mut dyn Opponent,
    ) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            engine.reseed(Some(seed));
            opponent.set_seed(seed.wrapping_add(1));
        }

        let total = self.config.num_games;
        let window_start = total.saturating_sub(self.config.window);
        let mut result = TrainingResult {
            total_games: 0,
            wins: 0,
            losses: 0,
            pruned: 0,
            recent_losses: 0,
            last_loss: None,
        };

        for observer in &mut self.observers {
            observer.on_training_start(total)?;
        }

        for game_num in 0..total {
            let outcome = self.play_game(game_num, engine, opponent)?;

            if outcome.winner == Side::A {
                result.wins += 1;
            } else {
                result.losses += 1;
                result.last_loss = Some(game_num);
                if game_num >= window_start {
                    result.recent_losses += 1;
                }
                if let Some(relocation) = engine.record_loss() {
                    result.pruned += 1;
                    for observer in &mut self.observers {
                        observer.on_prune(game_num, relocation)?;
                    }
                }
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
            result.total_games += 1;
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        info!(
            "trained {} games against {}: {} wins, {} losses, {} candidates pruned",
            result.total_games,
            opponent.name(),
            result.wins,
            result.losses,
            result.pruned
        );
        Ok(result)
    }

    fn play_game(
        &mut self,
        game_num: usize,
        engine: &mut DecisionEngine,
        opponent: &mut dyn Opponent,
    ) -> Result<Victory> {
        engine.reset();
        opponent.reset();
        let mut game = Game::new();

        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut step_num = 0;
        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }

            match game.to_move() {
                Side::H => {
                    let relocation =
                        opponent
                            .choose(game.board())
                            .ok_or_else(|| Error::InvalidConfiguration {
                                message: format!(
                                    "opponent '{}' returned no move in game {game_num}",
                                    opponent.name()
                                ),
                            })?;
                    game.play(relocation)?;
                }
                Side::A => {
                    game.play_engine(engine)?;
                }
            }

            if let Some(record) = game.history().last() {
                for observer in &mut self.observers {
                    observer.on_move(game_num, step_num, record)?;
                }
            }
            step_num += 1;
        };

        Ok(outcome)
    }
}
