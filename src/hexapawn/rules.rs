//! Move generation and win/stalemate evaluation

use serde::{Deserialize, Serialize};

use super::board::{Cell, Side, Signature};
use crate::types::Relocation;

/// Which rule decided a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryReason {
    /// The loser has no pieces left.
    Elimination,
    /// The winner reached the far edge.
    Breakthrough,
    /// Nobody can advance; the last mover takes the game.
    Stalemate,
}

/// A decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub winner: Side,
    pub reason: VictoryReason,
}

impl Victory {
    fn new(winner: Side, reason: VictoryReason) -> Self {
        Victory { winner, reason }
    }
}

/// Classify a position, returning the winner or `None` if play continues.
///
/// Rules are checked in priority order: elimination of H, elimination of A,
/// A on row 0, H on row 2, then H mobility. When H cannot advance the game is
/// treated as blocked for both sides and `last_mover` wins.
///
/// # Examples
///
/// ```
/// use hexapawn::hexapawn::{Side, Signature, evaluate};
///
/// let board: Signature = "...A....A".parse()?;
/// assert_eq!(evaluate(&board, Side::H), Some(Side::A));
///
/// let opening: Signature = "HHH...AAA".parse()?;
/// assert_eq!(evaluate(&opening, Side::A), None);
/// # Ok::<(), hexapawn::Error>(())
/// ```
pub fn evaluate(signature: &Signature, last_mover: Side) -> Option<Side> {
    classify(signature, last_mover).map(|victory| victory.winner)
}

/// Like [`evaluate`], but also reports which rule decided the game.
pub fn classify(signature: &Signature, last_mover: Side) -> Option<Victory> {
    if !signature.contains(Side::H) {
        return Some(Victory::new(Side::A, VictoryReason::Elimination));
    }
    if !signature.contains(Side::A) {
        return Some(Victory::new(Side::H, VictoryReason::Elimination));
    }

    if signature.side_in_row(Side::A, Side::A.goal_row()) {
        return Some(Victory::new(Side::A, VictoryReason::Breakthrough));
    }
    if signature.side_in_row(Side::H, Side::H.goal_row()) {
        return Some(Victory::new(Side::H, VictoryReason::Breakthrough));
    }

    if h_can_advance(signature) {
        return None;
    }

    Some(Victory::new(last_mover, VictoryReason::Stalemate))
}

/// Whether any H pawn in rows 0-1 has a straight advance or a diagonal capture.
fn h_can_advance(signature: &Signature) -> bool {
    let cells = signature.cells();
    (0..6).filter(|&i| cells[i] == Cell::H).any(|i| {
        let col = i % 3;
        cells[i + 3] == Cell::Empty
            || (col > 0 && cells[i + 2] == Cell::A)
            || (col < 2 && cells[i + 4] == Cell::A)
    })
}

/// All legal moves for `side`: a straight step into an empty cell, or a
/// diagonal step onto an opposing pawn.
pub fn legal_moves(signature: &Signature, side: Side) -> Vec<Relocation> {
    let cells = signature.cells();
    let enemy = side.opponent().to_cell();
    let mut moves = Vec::new();

    for from in signature.positions_of(side) {
        let (row, col) = (from / 3, from % 3);
        if row == side.goal_row() {
            continue;
        }
        let forward = match side {
            Side::H => from + 3,
            Side::A => from - 3,
        };

        if cells[forward] == Cell::Empty {
            moves.push(Relocation::from_raw(from, forward));
        }
        if col > 0 && cells[forward - 1] == enemy {
            moves.push(Relocation::from_raw(from, forward - 1));
        }
        if col < 2 && cells[forward + 1] == enemy {
            moves.push(Relocation::from_raw(from, forward + 1));
        }
    }

    moves
}

/// Whether `relocation` is a legal move for `side` on `signature`.
pub fn is_legal(signature: &Signature, side: Side, relocation: Relocation) -> bool {
    legal_moves(signature, side).contains(&relocation)
}
