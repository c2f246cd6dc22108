//! Observer implementations (adapters for the Observer port)

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    hexapawn::{MoveRecord, Side, Victory, VictoryReason},
    ports::Observer,
    types::Relocation,
};

/// Progress bar observer - Shows a progress bar during training
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    losses: usize,
    pruned: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            losses: 0,
            pruned: 0,
        }
    }

    fn message(&self) -> String {
        format!("W:{} L:{} pruned:{}", self.wins, self.losses, self.pruned)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_prune(&mut self, _game_num: usize, _relocation: Relocation) -> Result<()> {
        self.pruned += 1;
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Victory) -> Result<()> {
        match outcome.winner {
            Side::A => self.wins += 1,
            Side::H => self.losses += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Metrics observer - Tracks outcome counts and game lengths
#[derive(Debug, Default)]
pub struct MetricsObserver {
    wins: usize,
    losses: usize,
    stalemates: usize,
    null_moves: usize,
    pruned: usize,
    current_length: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get average game length in moves (both sides)
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_games: self.move_counts.len(),
            wins: self.wins,
            losses: self.losses,
            stalemates: self.stalemates,
            null_moves: self.null_moves,
            pruned: self.pruned,
            avg_game_length: self.avg_game_length(),
        }
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub stalemates: usize,
    pub null_moves: usize,
    pub pruned: usize,
    pub avg_game_length: f64,
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.current_length = 0;
        Ok(())
    }

    fn on_move(&mut self, _game_num: usize, _step_num: usize, record: &MoveRecord) -> Result<()> {
        self.current_length += 1;
        if record.relocation.is_none() {
            self.null_moves += 1;
        }
        Ok(())
    }

    fn on_prune(&mut self, _game_num: usize, _relocation: Relocation) -> Result<()> {
        self.pruned += 1;
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: Victory) -> Result<()> {
        match outcome.winner {
            Side::A => self.wins += 1,
            Side::H => self.losses += 1,
        }
        if outcome.reason == VictoryReason::Stalemate {
            self.stalemates += 1;
        }
        self.move_counts.push(self.current_length);
        Ok(())
    }
}

/// Writes game events to the `log` facade.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn on_move(&mut self, game_num: usize, step_num: usize, record: &MoveRecord) -> Result<()> {
        match (record.relocation, record.captured) {
            (Some(relocation), Some(captured)) => debug!(
                "game {game_num} step {step_num}: {} plays {relocation}, takes {captured}",
                record.side
            ),
            (Some(relocation), None) => debug!(
                "game {game_num} step {step_num}: {} plays {relocation}",
                record.side
            ),
            (None, _) => debug!("game {game_num} step {step_num}: {} passes", record.side),
        }
        Ok(())
    }

    fn on_prune(&mut self, game_num: usize, relocation: Relocation) -> Result<()> {
        info!("game {game_num}: engine lost, dropping {relocation}");
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Victory) -> Result<()> {
        debug!(
            "game {game_num}: {} wins by {:?}",
            outcome.winner, outcome.reason
        );
        Ok(())
    }
}
