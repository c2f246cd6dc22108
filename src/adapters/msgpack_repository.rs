//! MessagePack implementation of the strategy repository.

use std::{fs::File, path::Path};

use crate::{Result, engine::StrategyTable, error::Error, ports::StrategyRepository};

/// MessagePack-based strategy repository.
///
/// # Examples
///
/// ```no_run
/// use hexapawn::adapters::MsgPackRepository;
/// use hexapawn::engine::StrategyTable;
/// use hexapawn::ports::StrategyRepository;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// repo.save(&StrategyTable::standard(), Path::new("table.msgpack"))?;
/// let loaded = repo.load(Path::new("table.msgpack"))?;
/// # Ok::<(), hexapawn::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl StrategyRepository for MsgPackRepository {
    fn save(&self, table: &StrategyTable, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, table).map_err(|e| Error::SerializationContext {
            operation: "serialize strategy table to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StrategyTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let table: StrategyTable =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize strategy table from MessagePack".to_string(),
                message: e.to_string(),
            })?;
        table.validate()?;

        Ok(table)
    }
}
