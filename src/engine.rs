//! Pattern-table decision engine
//!
//! The engine plays side A for three turns per game. Each turn it looks the
//! board up in a fixed per-turn catalog (directly or through the left-right
//! mirror), plays one of the listed replies at random, and remembers the
//! choice so a lost game can strike it from the catalog.

pub mod builder;
pub mod catalog;
pub mod decision;
pub mod pruner;

pub use builder::EngineBuilder;
pub use catalog::{FIRST_TURN, MAX_TURNS, Pattern, StrategyTable};
pub use decision::{Decision, DecisionEngine};
pub use pruner::{DecisionRecord, prune};
