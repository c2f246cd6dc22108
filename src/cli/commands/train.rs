//! Train command - Play the engine against a stock opponent and prune on losses

use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    cli::{
        config::{CommonArgs, save_table},
        output::{print_kv, print_section},
    },
    hexapawn::{MoveRecord, Victory},
    pipeline::{
        GreedyOpponent, LoggingObserver, MetricsObserver, Observer, Opponent, ProgressObserver,
        RandomOpponent, TrainingConfig, TrainingPipeline,
    },
    types::Relocation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// Win if possible, else capture, else advance
    Greedy,
}

#[derive(Parser, Debug)]
#[command(about = "Train the engine against a stock opponent")]
pub struct TrainArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Opponent playing side H
    #[arg(long, value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    /// Where to write the trained table (defaults to --table)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Trailing window used for the "recent losses" figure
    #[arg(long, default_value_t = 20)]
    pub window: usize,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Show a progress bar
    #[arg(long)]
    pub progress: bool,
}

/// Lets the command read metrics back after the pipeline owns the observer.
struct SharedMetrics {
    inner: Arc<Mutex<MetricsObserver>>,
}

impl SharedMetrics {
    fn lock(&self) -> MutexGuard<'_, MetricsObserver> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Observer for SharedMetrics {
    fn on_game_start(&mut self, game_num: usize) -> crate::Result<()> {
        self.lock().on_game_start(game_num)
    }

    fn on_move(&mut self, game_num: usize, step_num: usize, record: &MoveRecord) -> crate::Result<()> {
        self.lock().on_move(game_num, step_num, record)
    }

    fn on_prune(&mut self, game_num: usize, relocation: Relocation) -> crate::Result<()> {
        self.lock().on_prune(game_num, relocation)
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Victory) -> crate::Result<()> {
        self.lock().on_game_end(game_num, outcome)
    }
}

fn build_opponent(kind: OpponentKind) -> Box<dyn Opponent> {
    match kind {
        OpponentKind::Random => Box::new(RandomOpponent::new("random")),
        OpponentKind::Greedy => Box::new(GreedyOpponent::new("greedy")),
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let mut engine = args.common.engine()?;
    let mut opponent = build_opponent(args.opponent);
    let candidates_before = engine.table().candidate_count();

    let metrics = Arc::new(Mutex::new(MetricsObserver::new()));
    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        num_games: args.games,
        seed: args.common.seed,
        window: args.window,
    })
    .with_observer(Box::new(LoggingObserver))
    .with_observer(Box::new(SharedMetrics {
        inner: Arc::clone(&metrics),
    }));
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run(&mut engine, opponent.as_mut())?;
    let summary = metrics
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .summary();

    print_section("Training Results");
    print_kv("Opponent", opponent.name());
    print_kv("Games", &result.total_games.to_string());
    print_kv(
        "Engine wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate() * 100.0),
    );
    print_kv("Engine losses", &result.losses.to_string());
    print_kv("Stalemate wins", &summary.stalemates.to_string());
    print_kv("Null moves", &summary.null_moves.to_string());
    print_kv("Avg game length", &format!("{:.2}", summary.avg_game_length));
    print_kv(
        &format!("Losses (last {})", args.window.min(result.total_games)),
        &result.recent_losses.to_string(),
    );
    print_kv(
        "Last loss",
        &result
            .last_loss
            .map_or_else(|| "never".to_string(), |game| format!("game {}", game + 1)),
    );
    print_kv(
        "Candidates",
        &format!(
            "{} -> {} ({} pruned)",
            candidates_before,
            engine.table().candidate_count(),
            result.pruned
        ),
    );

    if let Some(path) = &args.summary {
        result.save(path)?;
        println!("\nSummary written to {}", path.display());
    }

    if let Some(path) = args.output.as_ref().or(args.common.table.as_ref()) {
        save_table(engine.table(), path)?;
        println!("Strategy table saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trains_and_writes_table_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("table.json");
        let summary = dir.path().join("summary.json");

        execute(TrainArgs {
            common: CommonArgs {
                table: Some(table.clone()),
                seed: Some(9),
            },
            games: 30,
            opponent: OpponentKind::Greedy,
            output: None,
            window: 10,
            summary: Some(summary.clone()),
            progress: false,
        })
        .unwrap();

        let trained = crate::cli::config::load_table(&table).unwrap();
        assert!(trained.candidate_count() <= crate::engine::StrategyTable::standard().candidate_count());

        let text = std::fs::read_to_string(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["total_games"], 30);
    }
}
