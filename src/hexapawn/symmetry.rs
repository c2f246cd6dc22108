//! Left-right mirror symmetry of the board

use serde::{Deserialize, Serialize};

use crate::types::{Position, Relocation};

/// How a board matched a catalog pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    /// The board equals the pattern as stored.
    Identity,
    /// The board equals the pattern's left-right mirror.
    Mirrored,
}

impl Symmetry {
    /// Apply this symmetry to a relocation expressed in pattern coordinates.
    pub fn apply(self, relocation: Relocation) -> Relocation {
        match self {
            Symmetry::Identity => relocation,
            Symmetry::Mirrored => mirror_relocation(relocation),
        }
    }
}

/// Mirror a cell index within its row: column `c` becomes `2 - c`.
pub fn mirror_index(index: usize) -> usize {
    let col = index % 3;
    index + 2 - 2 * col
}

/// Mirror a validated position.
pub fn mirror_position(position: Position) -> Position {
    Position::from_raw(mirror_index(position.value()))
}

/// Mirror both endpoints of a relocation.
pub fn mirror_relocation(relocation: Relocation) -> Relocation {
    Relocation {
        from: mirror_position(relocation.from),
        to: mirror_position(relocation.to),
    }
}
