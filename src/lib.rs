//! Hexapawn decision engine
//!
//! This crate provides:
//! - A 3x3 Hexapawn board with mirror transforms and full move rules
//! - A per-turn catalog of board patterns with candidate moves for side A
//! - A decision engine that matches patterns (directly or mirrored) and
//!   plays a random surviving candidate
//! - Loss-driven pruning of the candidate that led to a defeat
//! - Win and stalemate evaluation
//! - Table persistence, a training pipeline and a command-line front end

pub mod adapters;
pub mod cli;
pub mod engine;
pub mod error;
pub mod hexapawn;
pub mod pipeline;
pub mod ports;
pub mod types;

pub use engine::{Decision, DecisionEngine, EngineBuilder, Pattern, StrategyTable};
pub use error::{Error, Result};
pub use hexapawn::{Board, Game, Side, Signature, Symmetry, Victory, VictoryReason, evaluate};
pub use types::{Position, Relocation};
