//! Tests for saving and loading strategy tables

use std::path::Path;

use hexapawn::{
    Board, DecisionEngine, Error, StrategyTable,
    adapters::{FileRepository, InMemoryRepository, JsonRepository, MsgPackRepository},
    ports::StrategyRepository,
};
use tempfile::TempDir;

/// A table with one candidate pruned from the first opening pattern.
fn pruned_table() -> StrategyTable {
    let mut engine = DecisionEngine::new(Some(11));
    let mut board = Board::from_signature(&".HHH..AAA".parse().unwrap());
    engine.decide(&mut board).unwrap();
    engine.record_loss().expect("opening choice is prunable");
    engine.into_table()
}

#[test]
fn test_pruned_table_survives_both_formats() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let table = pruned_table();

    for name in ["table.msgpack", "table.json", "table"] {
        let path = temp_dir.path().join(name);
        FileRepository.save(&table, &path).expect("Failed to save table");
        let loaded = FileRepository.load(&path).expect("Failed to load table");
        assert_eq!(loaded, table, "{name}");
        assert_eq!(loaded.candidate_count(), StrategyTable::standard().candidate_count() - 1);
    }
}

#[test]
fn test_extension_picks_the_encoding() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let json_path = temp_dir.path().join("table.json");
    let binary_path = temp_dir.path().join("table.bin");

    FileRepository.save(&StrategyTable::standard(), &json_path).unwrap();
    FileRepository.save(&StrategyTable::standard(), &binary_path).unwrap();

    assert!(JsonRepository.load(&json_path).is_ok());
    assert!(MsgPackRepository::new().load(&binary_path).is_ok());
    assert!(JsonRepository.load(&binary_path).is_err());
}

#[test]
fn test_engine_resumes_from_loaded_table() {
    let repo = InMemoryRepository::new();
    let path = Path::new("trained");
    repo.save(&pruned_table(), path).unwrap();
    assert!(repo.contains(path));

    let mut engine = DecisionEngine::builder()
        .seed(11)
        .table(repo.load(path).unwrap())
        .build();
    assert_eq!(engine.table(), &pruned_table());

    let mut board = Board::from_signature(&".HHH..AAA".parse().unwrap());
    let decision = engine.decide(&mut board).unwrap();
    assert!(!decision.is_null_move());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = FileRepository
        .load(&temp_dir.path().join("absent.msgpack"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_tampered_mirror_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("table.json");
    JsonRepository.save(&StrategyTable::standard(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let pattern = &mut value["turns"][0][0];
    pattern["mirrored"] = pattern["signature"].clone();
    std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    assert!(matches!(
        JsonRepository.load(&path),
        Err(Error::CorruptTable { .. })
    ));
}

#[test]
fn test_wrong_turn_count_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("table.json");
    std::fs::write(&path, r#"{"turns": [[], []]}"#).unwrap();

    assert!(matches!(
        JsonRepository.load(&path),
        Err(Error::CorruptTable { .. })
    ));
}
