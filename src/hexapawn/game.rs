//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Piece, Side},
    rules::{self, Victory},
};
use crate::{
    Error, Result,
    engine::{Decision, DecisionEngine},
    types::Relocation,
};

/// One move in the game history. `relocation` is `None` for an engine null move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    pub relocation: Option<Relocation>,
    pub captured: Option<Piece>,
}

/// A single game: H moves first, the engine answers as A.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Side,
    history: Vec<MoveRecord>,
    outcome: Option<Victory>,
}

impl Game {
    /// Create a new game from the standard opening, H to move
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::H)
    }

    /// Start from an arbitrary position.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        Game {
            board,
            to_move,
            history: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Victory> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Side> {
        self.outcome.map(|victory| victory.winner)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Relocation> {
        rules::legal_moves(&self.board.signature(), self.to_move)
    }

    /// Play a move for the side to move, after checking it is legal.
    ///
    /// Returns the captured piece, if any.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] after the game is decided, [`Error::IllegalMove`]
    /// for a move the rules do not allow.
    pub fn play(&mut self, relocation: Relocation) -> Result<Option<Piece>> {
        self.ensure_running()?;

        let side = self.to_move;
        if !rules::is_legal(&self.board.signature(), side, relocation) {
            let (from, to) = relocation.cells();
            return Err(Error::IllegalMove { side, from, to });
        }

        let captured = self.board.relocate(relocation);
        self.history.push(MoveRecord {
            side,
            relocation: Some(relocation),
            captured,
        });
        self.settle(side);
        Ok(captured)
    }

    /// Let the engine take A's turn on the live board.
    ///
    /// # Errors
    ///
    /// [`Error::WrongTurn`] when H is to move, [`Error::GameOver`] after the
    /// game is decided, and anything [`DecisionEngine::decide`] returns.
    pub fn play_engine(&mut self, engine: &mut DecisionEngine) -> Result<Decision> {
        self.ensure_running()?;
        if self.to_move != Side::A {
            return Err(Error::WrongTurn {
                expected: self.to_move,
                got: Side::A,
            });
        }

        let decision = engine.decide(&mut self.board)?;
        self.history.push(MoveRecord {
            side: Side::A,
            relocation: decision.relocation,
            captured: decision.captured,
        });
        self.settle(Side::A);
        Ok(decision)
    }

    fn ensure_running(&self) -> Result<()> {
        if self.outcome.is_some() {
            Err(Error::GameOver)
        } else {
            Ok(())
        }
    }

    fn settle(&mut self, mover: Side) {
        self.outcome = rules::classify(&self.board.signature(), mover);
        self.to_move = mover.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
