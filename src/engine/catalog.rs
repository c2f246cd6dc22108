//! Strategy table: per-turn canonical patterns with candidate relocations

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    hexapawn::{CELLS, Cell, Signature, Symmetry},
    types::Relocation,
};

/// First turn number the engine plays.
pub const FIRST_TURN: usize = 1;
/// Last turn number the engine plays.
pub const MAX_TURNS: usize = 3;

/// A canonical board shape and the moves the engine may answer it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    signature: Signature,
    mirrored: Signature,
    relocations: Vec<Relocation>,
}

impl Pattern {
    /// Create a pattern, precomputing the mirror of `signature`.
    pub fn new(signature: Signature, relocations: Vec<Relocation>) -> Self {
        Pattern {
            mirrored: signature.mirror(),
            signature,
            relocations,
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn mirrored(&self) -> &Signature {
        &self.mirrored
    }

    pub fn relocations(&self) -> &[Relocation] {
        &self.relocations
    }

    /// A pattern with no candidates never contributes a move.
    pub fn is_passive(&self) -> bool {
        self.relocations.is_empty()
    }

    /// How `board` matches this pattern, preferring the direct form.
    pub fn matches(&self, board: &Signature) -> Option<Symmetry> {
        if self.signature == *board {
            Some(Symmetry::Identity)
        } else if self.mirrored == *board {
            Some(Symmetry::Mirrored)
        } else {
            None
        }
    }

    /// Remove the candidate at `index`, if present.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Relocation> {
        (index < self.relocations.len()).then(|| self.relocations.remove(index))
    }
}

/// Turn number -> ordered patterns.
///
/// Pattern order and candidate order are significant: decision records
/// refer to both by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTable {
    turns: Vec<Vec<Pattern>>,
}

impl StrategyTable {
    /// Build a table from per-turn pattern lists, turn 1 first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptTable`] unless exactly one list per turn is given.
    pub fn new(turns: Vec<Vec<Pattern>>) -> Result<Self> {
        let table = StrategyTable { turns };
        table.validate()?;
        Ok(table)
    }

    /// The stock opening book.
    pub fn standard() -> Self {
        StrategyTable {
            turns: vec![
                build_turn(TURN_ONE),
                build_turn(TURN_TWO),
                build_turn(TURN_THREE),
            ],
        }
    }

    /// Patterns for `turn` (1-based), or an empty slice outside 1-3.
    pub fn patterns(&self, turn: usize) -> &[Pattern] {
        turn.checked_sub(FIRST_TURN)
            .and_then(|idx| self.turns.get(idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn pattern(&self, turn: usize, index: usize) -> Option<&Pattern> {
        self.patterns(turn).get(index)
    }

    pub(crate) fn pattern_mut(&mut self, turn: usize, index: usize) -> Option<&mut Pattern> {
        turn.checked_sub(FIRST_TURN)
            .and_then(|idx| self.turns.get_mut(idx))
            .and_then(|patterns| patterns.get_mut(index))
    }

    /// Iterate `(turn, patterns)` in turn order.
    pub fn turns(&self) -> impl Iterator<Item = (usize, &[Pattern])> + '_ {
        self.turns
            .iter()
            .enumerate()
            .map(|(idx, patterns)| (idx + FIRST_TURN, patterns.as_slice()))
    }

    pub fn pattern_count(&self) -> usize {
        self.turns.iter().map(Vec::len).sum()
    }

    /// Total number of candidate relocations across all patterns.
    pub fn candidate_count(&self) -> usize {
        self.turns
            .iter()
            .flatten()
            .map(|pattern| pattern.relocations.len())
            .sum()
    }

    /// Check structural consistency, e.g. after loading from storage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptTable`] when the turn count is wrong, a
    /// stored mirror does not match its signature, or a candidate leaves the
    /// board.
    pub fn validate(&self) -> Result<()> {
        if self.turns.len() != MAX_TURNS {
            return Err(Error::CorruptTable {
                message: format!(
                    "expected {MAX_TURNS} turn lists, found {}",
                    self.turns.len()
                ),
            });
        }

        for (turn, patterns) in self.turns() {
            for (index, pattern) in patterns.iter().enumerate() {
                if pattern.mirrored != pattern.signature.mirror() {
                    return Err(Error::CorruptTable {
                        message: format!(
                            "turn {turn} pattern {index} ({}) has mirror {} instead of {}",
                            pattern.signature,
                            pattern.mirrored,
                            pattern.signature.mirror()
                        ),
                    });
                }
                if let Some(relocation) = pattern
                    .relocations
                    .iter()
                    .find(|relocation| {
                        relocation.from.value() >= CELLS || relocation.to.value() >= CELLS
                    })
                {
                    return Err(Error::CorruptTable {
                        message: format!(
                            "turn {turn} pattern {index} ({}) has off-board candidate {relocation}",
                            pattern.signature
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::standard()
    }
}

type PatternEntry = ([Cell; 9], &'static [(usize, usize)]);

fn build_turn(entries: &[PatternEntry]) -> Vec<Pattern> {
    entries
        .iter()
        .map(|(cells, moves)| {
            Pattern::new(
                Signature::new(*cells),
                moves
                    .iter()
                    .map(|&(from, to)| Relocation::from_raw(from, to))
                    .collect(),
            )
        })
        .collect()
}

const E: Cell = Cell::Empty;
const A: Cell = Cell::A;
const H: Cell = Cell::H;

// H moves first, so each entry is the board the engine sees on that turn.
#[rustfmt::skip]
const TURN_ONE: &[PatternEntry] = &[
    ([E, H, H, H, E, E, A, A, A], &[(7, 3), (7, 4), (8, 5)]),
    ([H, E, H, E, H, E, A, A, A], &[(6, 3), (6, 4)]),
];

#[rustfmt::skip]
const TURN_TWO: &[PatternEntry] = &[
    ([E, E, H, H, E, E, A, E, A], &[(8, 5)]),
    ([E, E, H, A, H, E, A, E, A], &[(3, 0), (6, 4), (8, 4), (8, 5)]),
    ([E, H, E, A, E, H, A, E, A], &[(3, 0), (3, 1)]),
    ([E, H, E, H, H, E, A, E, A], &[(6, 4), (8, 4), (8, 5)]),
    ([E, E, H, H, H, A, A, A, E], &[(6, 4), (7, 3)]),
    ([E, E, H, H, E, H, A, A, E], &[(7, 3), (7, 4), (7, 5)]),
    ([H, E, E, A, H, H, E, A, A], &[(7, 5), (8, 4)]),
    ([E, E, H, H, A, E, E, A, A], &[(4, 1), (4, 2), (7, 3), (8, 5)]),
    ([E, E, H, E, H, E, E, A, A], &[(8, 4), (8, 5)]),
    ([H, E, E, E, H, E, E, A, A], &[(8, 4), (8, 5)]),
    ([H, E, E, E, A, H, E, A, A], &[(4, 0), (4, 1), (7, 5)]),
];

#[rustfmt::skip]
const TURN_THREE: &[PatternEntry] = &[
    ([E, E, E, A, H, E, E, E, A], &[(3, 0), (8, 4), (8, 5)]),
    ([E, E, E, A, A, H, E, E, A], &[(3, 0), (4, 1)]),
    ([E, E, E, A, H, E, A, E, E], &[(3, 0), (6, 4)]),
    ([E, E, E, A, A, H, A, E, E], &[(3, 0), (4, 1)]),
    ([E, E, E, H, H, A, E, A, E], &[(5, 2), (7, 3)]),
    ([E, E, E, A, H, H, E, A, E], &[(3, 0), (7, 5)]),
    ([E, E, E, E, A, H, E, A, E], &[(4, 1), (7, 5)]),
    ([E, E, E, H, A, E, E, A, E], &[(4, 1), (7, 3)]),
    ([E, E, E, H, A, A, E, E, A], &[(4, 1), (5, 2)]),
    ([E, E, E, E, H, A, E, E, A], &[(5, 2), (8, 4)]),
    ([E, E, E, H, H, H, A, E, E], &[(6, 4)]),
];
