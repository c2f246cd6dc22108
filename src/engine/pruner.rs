//! Adaptive pruning: permanently drop a relocation that led to a loss

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::catalog::StrategyTable;
use crate::types::Relocation;

/// What the engine chose on its most recent turn.
///
/// `pattern` and `relocation` are positions inside the strategy table; both
/// are `None` for a null move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub turn: usize,
    pub pattern: Option<usize>,
    pub relocation: Option<usize>,
}

impl DecisionRecord {
    pub fn null_move(turn: usize) -> Self {
        DecisionRecord {
            turn,
            pattern: None,
            relocation: None,
        }
    }

    pub fn chosen(turn: usize, pattern: usize, relocation: usize) -> Self {
        DecisionRecord {
            turn,
            pattern: Some(pattern),
            relocation: Some(relocation),
        }
    }

    /// Whether the record names a concrete candidate.
    pub fn is_null_move(&self) -> bool {
        self.pattern.is_none() || self.relocation.is_none()
    }
}

/// Remove the candidate named by `record` from `table`.
///
/// Returns the removed relocation, or `None` for a null move or a record that
/// no longer points inside the table.
pub fn prune(table: &mut StrategyTable, record: &DecisionRecord) -> Option<Relocation> {
    let (Some(pattern_idx), Some(relocation_idx)) = (record.pattern, record.relocation) else {
        return None;
    };

    let Some(pattern) = table.pattern_mut(record.turn, pattern_idx) else {
        warn!(
            "decision record points at missing pattern {pattern_idx} on turn {}",
            record.turn
        );
        return None;
    };

    let signature = *pattern.signature();
    let removed = pattern.remove(relocation_idx);
    match removed {
        Some(relocation) => info!(
            "pruned {relocation} from turn {} pattern {pattern_idx} ({signature}), {} left",
            record.turn,
            pattern.relocations().len()
        ),
        None => warn!(
            "decision record points at missing candidate {relocation_idx} of turn {} pattern {pattern_idx}",
            record.turn
        ),
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_move_record_prunes_nothing() {
        let mut table = StrategyTable::standard();
        let before = table.clone();
        assert_eq!(prune(&mut table, &DecisionRecord::null_move(2)), None);
        assert_eq!(table, before);
    }

    #[test]
    fn prune_removes_exactly_one_candidate() {
        let mut table = StrategyTable::standard();
        let removed = prune(&mut table, &DecisionRecord::chosen(1, 0, 1));
        assert_eq!(removed, Some(Relocation::from_raw(7, 4)));
        assert_eq!(
            table.patterns(1)[0].relocations(),
            [Relocation::from_raw(7, 3), Relocation::from_raw(8, 5)]
        );
        assert_eq!(table.patterns(1)[1].relocations().len(), 2);
    }

    #[test]
    fn stale_record_is_ignored() {
        let mut table = StrategyTable::standard();
        assert_eq!(prune(&mut table, &DecisionRecord::chosen(1, 9, 0)), None);
        assert_eq!(prune(&mut table, &DecisionRecord::chosen(1, 0, 9)), None);
        assert_eq!(prune(&mut table, &DecisionRecord::chosen(4, 0, 0)), None);
        assert_eq!(table, StrategyTable::standard());
    }
}
