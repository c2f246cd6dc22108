//! Shared configuration for CLI commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use log::info;

use crate::{
    adapters::FileRepository,
    engine::{DecisionEngine, StrategyTable},
    ports::StrategyRepository,
};

/// Options every command accepts
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Strategy table file (`.json` for JSON, anything else MessagePack).
    /// A missing file means the stock table.
    #[arg(long, short = 't')]
    pub table: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CommonArgs {
    /// Load the configured table, falling back to the stock one.
    pub fn load_table(&self) -> Result<StrategyTable> {
        match &self.table {
            Some(path) if path.exists() => load_table(path),
            Some(path) => {
                info!("{} does not exist yet, starting from the stock table", path.display());
                Ok(StrategyTable::standard())
            }
            None => Ok(StrategyTable::standard()),
        }
    }

    /// Build an engine over the configured table and seed.
    pub fn engine(&self) -> Result<DecisionEngine> {
        Ok(DecisionEngine::builder()
            .maybe_seed(self.seed)
            .table(self.load_table()?)
            .build())
    }
}

pub fn load_table(path: &Path) -> Result<StrategyTable> {
    FileRepository
        .load(path)
        .with_context(|| format!("loading strategy table from {}", path.display()))
}

pub fn save_table(table: &StrategyTable, path: &Path) -> Result<()> {
    FileRepository
        .save(table, path)
        .with_context(|| format!("saving strategy table to {}", path.display()))
}
