//! Hexapawn game model: board, symmetry, rules and the game driver

pub mod board;
pub mod game;
pub mod rules;
pub mod symmetry;

pub use board::{Board, CELLS, Cell, Piece, Side, Signature};
pub use game::{Game, MoveRecord};
pub use rules::{Victory, VictoryReason, classify, evaluate, is_legal, legal_moves};
pub use symmetry::{Symmetry, mirror_index, mirror_relocation};
