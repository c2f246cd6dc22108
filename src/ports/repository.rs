//! Repository port for strategy table persistence.

use std::path::Path;

use crate::{Result, engine::StrategyTable};

/// Port for persisting and loading strategy tables.
///
/// Implementations must preserve per-turn pattern order and per-pattern
/// candidate order exactly, since decision records index into both.
///
/// # Examples
///
/// ```no_run
/// use hexapawn::engine::StrategyTable;
/// use hexapawn::ports::StrategyRepository;
/// use std::path::Path;
///
/// fn save_table<R: StrategyRepository>(
///     repo: &R,
///     table: &StrategyTable,
///     path: &Path,
/// ) -> hexapawn::Result<()> {
///     repo.save(table, path)
/// }
/// ```
pub trait StrategyRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    fn save(&self, table: &StrategyTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, the format is
    /// invalid, or the decoded table fails [`StrategyTable::validate`].
    fn load(&self, path: &Path) -> Result<StrategyTable>;
}
