//! JSON implementation of the strategy repository, for tables meant to be
//! read or edited by hand.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{Result, engine::StrategyTable, error::Error, ports::StrategyRepository};

/// Pretty-printed JSON strategy repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl StrategyRepository for JsonRepository {
    fn save(&self, table: &StrategyTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), table)?;
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<StrategyTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;
        let table: StrategyTable = serde_json::from_reader(BufReader::new(file))?;
        table.validate()?;
        Ok(table)
    }
}
