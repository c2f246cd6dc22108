//! Decision engine: match the live board against the strategy table and move

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{
    builder::EngineBuilder,
    catalog::{FIRST_TURN, MAX_TURNS, StrategyTable},
    pruner::{self, DecisionRecord},
};
use crate::{
    Error, Result,
    hexapawn::{Board, Piece, Symmetry},
    types::Relocation,
};

/// Outcome of one engine turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Piece that stood on the destination cell, if any.
    pub captured: Option<Piece>,
    /// Relocation applied to the board, in board coordinates. `None` for a null move.
    pub relocation: Option<Relocation>,
    /// How the board matched its pattern. `None` for a null move.
    pub symmetry: Option<Symmetry>,
}

impl Decision {
    fn null_move() -> Self {
        Decision {
            captured: None,
            relocation: None,
            symmetry: None,
        }
    }

    pub fn is_null_move(&self) -> bool {
        self.relocation.is_none()
    }
}

/// The automated A player.
///
/// Owns its strategy table; pruning through [`DecisionEngine::record_loss`]
/// is permanent for the lifetime of the instance. One instance per game in
/// flight.
pub struct DecisionEngine {
    table: StrategyTable,
    turn: usize,
    last_decision: Option<DecisionRecord>,
    rng: StdRng,
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("turn", &self.turn)
            .field("last_decision", &self.last_decision)
            .field("candidates", &self.table.candidate_count())
            .finish()
    }
}

impl DecisionEngine {
    /// Create a new builder for constructing an engine.
    ///
    /// # Example
    /// ```
    /// use hexapawn::engine::DecisionEngine;
    ///
    /// let engine = DecisionEngine::builder().seed(7).build();
    /// assert_eq!(engine.turn(), 1);
    /// ```
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Engine with the stock table and an optional seed.
    pub fn new(seed: Option<u64>) -> Self {
        let mut builder = Self::builder();
        if let Some(s) = seed {
            builder = builder.seed(s);
        }
        builder.build()
    }

    pub(crate) fn from_parts(table: StrategyTable, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        DecisionEngine {
            table,
            turn: FIRST_TURN,
            last_decision: None,
            rng,
        }
    }

    /// Set or reset the engine's RNG seed
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
    }

    /// Turn number the next call to [`decide`](Self::decide) will play.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn table(&self) -> &StrategyTable {
        &self.table
    }

    /// Give up the engine, keeping its (possibly pruned) table.
    pub fn into_table(self) -> StrategyTable {
        self.table
    }

    pub fn last_decision(&self) -> Option<&DecisionRecord> {
        self.last_decision.as_ref()
    }

    /// Play one turn on `board`, mutating it in place.
    ///
    /// Scans the current turn's patterns in order, skipping those without
    /// candidates. The first pattern whose signature or mirror equals the
    /// board supplies a uniformly random candidate, mirrored back when the
    /// match was through the mirror. Without a match the turn is a null move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfSequence`] once three turns have been played
    /// since the last [`reset`](Self::reset); the board is left untouched.
    pub fn decide(&mut self, board: &mut Board) -> Result<Decision> {
        if self.turn > MAX_TURNS {
            return Err(Error::OutOfSequence { turn: self.turn });
        }

        let signature = board.signature();
        let matched = self
            .table
            .patterns(self.turn)
            .iter()
            .enumerate()
            .filter(|(_, pattern)| !pattern.is_passive())
            .find_map(|(idx, pattern)| pattern.matches(&signature).map(|sym| (idx, sym)));

        let (record, decision) = match matched {
            Some((pattern_idx, symmetry)) => {
                let candidates = self.table.patterns(self.turn)[pattern_idx].relocations();
                let choice = self.rng.random_range(0..candidates.len());
                let relocation = symmetry.apply(candidates[choice]);
                let captured = board.relocate(relocation);

                debug!(
                    "turn {}: {signature} matched pattern {pattern_idx} ({symmetry:?}), playing {relocation}",
                    self.turn
                );
                (
                    DecisionRecord::chosen(self.turn, pattern_idx, choice),
                    Decision {
                        captured,
                        relocation: Some(relocation),
                        symmetry: Some(symmetry),
                    },
                )
            }
            None => {
                debug!("turn {}: no pattern for {signature}, null move", self.turn);
                (DecisionRecord::null_move(self.turn), Decision::null_move())
            }
        };

        self.last_decision = Some(record);
        self.turn += 1;
        Ok(decision)
    }

    /// Start a new game: the turn counter goes back to 1. The table is kept.
    pub fn reset(&mut self) {
        self.turn = FIRST_TURN;
    }

    /// Tell the engine its last decision lost the game.
    ///
    /// The relocation chosen on the most recent turn is removed from its
    /// pattern for good. A null move prunes nothing. The decision record is
    /// consumed, so calling this twice in a row prunes once.
    pub fn record_loss(&mut self) -> Option<Relocation> {
        let record = self.last_decision.take()?;
        pruner::prune(&mut self.table, &record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexapawn::{Side, Signature};

    fn board(text: &str) -> Board {
        let signature: Signature = text.parse().expect("test board should parse");
        Board::from_signature(&signature)
    }

    #[test]
    fn first_turn_direct_match() {
        let mut engine = DecisionEngine::new(Some(1));
        let mut live = board(".HH/H../AAA");
        let decision = engine.decide(&mut live).expect("turn 1 is in range");

        let allowed = [
            Relocation::from_raw(7, 3),
            Relocation::from_raw(7, 4),
            Relocation::from_raw(8, 5),
        ];
        let relocation = decision.relocation.expect("pattern should match");
        assert!(allowed.contains(&relocation));
        assert_eq!(decision.symmetry, Some(Symmetry::Identity));
        assert_eq!(engine.turn(), 2);

        if relocation == Relocation::from_raw(7, 3) {
            assert_eq!(decision.captured.map(|p| p.side), Some(Side::H));
        } else {
            assert_eq!(decision.captured, None);
        }
        assert_eq!(live.get(relocation.from), None);
        assert_eq!(live.get(relocation.to).map(|p| p.side), Some(Side::A));
    }

    #[test]
    fn mirrored_match_mirrors_relocation() {
        let mut engine = DecisionEngine::new(Some(3));
        let mut live = board("HH./..H/AAA");
        let decision = engine.decide(&mut live).unwrap();

        let allowed = [
            Relocation::from_raw(7, 5),
            Relocation::from_raw(7, 4),
            Relocation::from_raw(6, 3),
        ];
        assert!(allowed.contains(&decision.relocation.unwrap()));
        assert_eq!(decision.symmetry, Some(Symmetry::Mirrored));
    }

    #[test]
    fn unknown_board_is_a_null_move() {
        let mut engine = DecisionEngine::new(Some(5));
        let mut live = board("HHH/.../AAA");
        let before = live;
        let decision = engine.decide(&mut live).unwrap();
        assert!(decision.is_null_move());
        assert_eq!(live, before);
        assert_eq!(engine.turn(), 2);
        assert_eq!(
            engine.last_decision(),
            Some(&DecisionRecord::null_move(1))
        );
    }

    #[test]
    fn fourth_turn_is_out_of_sequence() {
        let mut engine = DecisionEngine::new(Some(9));
        let mut live = board("HHH/.../AAA");
        for _ in 0..3 {
            engine.decide(&mut live).unwrap();
        }
        let before = live;
        let err = engine.decide(&mut live).unwrap_err();
        assert!(matches!(err, Error::OutOfSequence { turn: 4 }));
        assert_eq!(live, before);

        engine.reset();
        assert_eq!(engine.turn(), 1);
        assert!(engine.decide(&mut live).is_ok());
    }

    #[test]
    fn record_loss_is_consumed() {
        let mut engine = DecisionEngine::new(Some(11));
        let mut live = board("H.H/.H./AAA");
        engine.decide(&mut live).unwrap();

        assert!(engine.record_loss().is_some());
        assert_eq!(engine.table().patterns(1)[1].relocations().len(), 1);
        assert_eq!(engine.record_loss(), None);
        assert_eq!(engine.table().patterns(1)[1].relocations().len(), 1);
    }
}
