//! Stock opponents for side H

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    hexapawn::{Board, Side, legal_moves},
    ports::Opponent,
    types::Relocation,
};

/// Uniformly random legal moves (baseline)
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    /// Create a new random opponent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random opponent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self, board: &Board) -> Option<Relocation> {
        let moves = legal_moves(&board.signature(), Side::H);
        if moves.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..moves.len());
        Some(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Wins on the spot when it can, otherwise captures, otherwise advances the
/// first pawn that can move.
pub struct GreedyOpponent {
    name: String,
}

impl GreedyOpponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Opponent for GreedyOpponent {
    fn choose(&mut self, board: &Board) -> Option<Relocation> {
        let signature = board.signature();
        let moves = legal_moves(&signature, Side::H);

        let reaches_goal = |m: &&Relocation| m.to.row() == Side::H.goal_row();
        let captures = |m: &&Relocation| signature.get(m.to).side() == Some(Side::A);

        moves
            .iter()
            .find(reaches_goal)
            .or_else(|| moves.iter().find(captures))
            .or_else(|| moves.first())
            .copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Replays a fixed move list, restarting it at every game.
///
/// Moves that are illegal in the current position are still returned; the
/// game driver rejects them.
pub struct ScriptedOpponent {
    name: String,
    script: Vec<Relocation>,
    pending: VecDeque<Relocation>,
}

impl ScriptedOpponent {
    pub fn new(name: impl Into<String>, script: Vec<Relocation>) -> Self {
        Self {
            name: name.into(),
            pending: script.iter().copied().collect(),
            script,
        }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self, _board: &Board) -> Option<Relocation> {
        self.pending.pop_front()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reset(&mut self) {
        self.pending = self.script.iter().copied().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexapawn::Signature;

    fn board(text: &str) -> Board {
        let signature: Signature = text.parse().unwrap();
        Board::from_signature(&signature)
    }

    #[test]
    fn random_opponent_only_plays_legal_moves() {
        let mut opponent = RandomOpponent::with_seed("random", 3);
        let live = board("HHH...AAA");
        let legal = legal_moves(&live.signature(), Side::H);
        for _ in 0..20 {
            let choice = opponent.choose(&live).expect("opening has moves");
            assert!(legal.contains(&choice));
        }
        assert_eq!(opponent.choose(&board(".H./.A./...")), None);
    }

    #[test]
    fn greedy_prefers_win_then_capture() {
        let mut greedy = GreedyOpponent::new("greedy");
        assert_eq!(
            greedy.choose(&board(".H./H../.AA")),
            Some(Relocation::from_raw(3, 6))
        );
        assert_eq!(
            greedy.choose(&board("H.H/.A./A.A")),
            Some(Relocation::from_raw(0, 4))
        );
        assert_eq!(
            greedy.choose(&board("HHH/.../AAA")),
            Some(Relocation::from_raw(0, 3))
        );
    }

    #[test]
    fn scripted_opponent_restarts_on_reset() {
        let script = vec![Relocation::from_raw(0, 3), Relocation::from_raw(1, 4)];
        let mut scripted = ScriptedOpponent::new("script", script);
        let live = Board::new();
        assert_eq!(scripted.choose(&live), Some(Relocation::from_raw(0, 3)));
        assert_eq!(scripted.choose(&live), Some(Relocation::from_raw(1, 4)));
        assert_eq!(scripted.choose(&live), None);
        scripted.reset();
        assert_eq!(scripted.choose(&live), Some(Relocation::from_raw(0, 3)));
    }
}
