//! Adapters implementing domain ports.
//!
//! Storage adapters for [`crate::ports::StrategyRepository`] and the stock
//! opponents and observers live here and in [`crate::pipeline`].

pub mod in_memory_repository;
pub mod json_repository;
pub mod msgpack_repository;

use std::path::Path;

pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonRepository;
pub use msgpack_repository::MsgPackRepository;

use crate::{Result, engine::StrategyTable, ports::StrategyRepository};

/// File-backed repository chosen by extension: `.json` uses JSON, anything
/// else MessagePack.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRepository;

impl FileRepository {
    fn is_json(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl StrategyRepository for FileRepository {
    fn save(&self, table: &StrategyTable, path: &Path) -> Result<()> {
        if Self::is_json(path) {
            JsonRepository.save(table, path)
        } else {
            MsgPackRepository.save(table, path)
        }
    }

    fn load(&self, path: &Path) -> Result<StrategyTable> {
        if Self::is_json(path) {
            JsonRepository.load(path)
        } else {
            MsgPackRepository.load(path)
        }
    }
}
