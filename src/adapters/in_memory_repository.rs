//! In-memory strategy repository for testing.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Result, engine::StrategyTable, error::Error, ports::StrategyRepository};

/// In-memory repository for testing.
///
/// Stores MessagePack-encoded tables keyed by path, so a save/load cycle
/// goes through the same serde path as the file adapters. All clones share
/// the same storage.
///
/// # Examples
///
/// ```
/// use hexapawn::adapters::InMemoryRepository;
/// use hexapawn::engine::StrategyTable;
/// use hexapawn::ports::StrategyRepository;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&StrategyTable::standard(), Path::new("table"))?;
/// let loaded = repo.load(Path::new("table"))?;
/// assert_eq!(loaded, StrategyTable::standard());
/// # Ok::<(), hexapawn::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    /// Check if a table exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(path.to_string_lossy().as_ref())
    }
}

impl StrategyRepository for InMemoryRepository {
    fn save(&self, table: &StrategyTable, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();

        let bytes = rmp_serde::to_vec(table).map_err(|e| Error::SerializationContext {
            operation: "serialize strategy table for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StrategyTable> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load strategy table from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        let table: StrategyTable =
            rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
                operation: "deserialize strategy table from in-memory storage".to_string(),
                message: e.to_string(),
            })?;
        table.validate()?;
        Ok(table)
    }
}
