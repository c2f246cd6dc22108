//! Training pipeline
//!
//! This module provides:
//! - Stock opponents for side H
//! - Observers for progress, metrics and logging
//! - The training loop that prunes the engine after each loss

pub mod observers;
pub mod opponents;
pub mod training;

pub use observers::{LoggingObserver, MetricsObserver, MetricsSummary, ProgressObserver};
pub use opponents::{GreedyOpponent, RandomOpponent, ScriptedOpponent};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Observer, Opponent};
