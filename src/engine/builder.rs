//! Builder pattern for DecisionEngine construction
//!
//! Provides a fluent API for configuring the engine's seed and starting
//! strategy table.

use super::{catalog::StrategyTable, decision::DecisionEngine};

/// Builder for constructing DecisionEngine instances.
///
/// # Examples
///
/// ```
/// use hexapawn::engine::{EngineBuilder, StrategyTable};
///
/// // Stock table, nondeterministic choices
/// let engine = EngineBuilder::new().build();
///
/// // Reproducible choices over a previously trained table
/// let engine = EngineBuilder::new()
///     .seed(42)
///     .table(StrategyTable::standard())
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    seed: Option<u64>,
    table: Option<StrategyTable>,
}

impl EngineBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the seed from an optional value; `None` keeps choices random.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Start from an existing strategy table instead of the stock one.
    pub fn table(mut self, table: StrategyTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Build the engine.
    pub fn build(self) -> DecisionEngine {
        DecisionEngine::from_parts(self.table.unwrap_or_default(), self.seed)
    }
}
