//! Newtype wrappers for board coordinates and piece moves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell index on the 3x3 board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < 9 {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Create a position from a raw value without validation.
    ///
    /// Only use with known-good constant values.
    pub const fn from_raw(value: usize) -> Self {
        Position(value)
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }

    /// Row of this cell (0 = H's home row, 2 = A's home row).
    pub fn row(&self) -> usize {
        self.0 / 3
    }

    /// Column of this cell.
    pub fn col(&self) -> usize {
        self.0 % 3
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Position::new(value)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single piece move from `from` to `to`, capturing whatever occupies `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relocation {
    pub from: Position,
    pub to: Position,
}

impl Relocation {
    /// Create a relocation, validating both endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if either endpoint is >= 9.
    pub fn new(from: usize, to: usize) -> Result<Self, crate::Error> {
        Ok(Relocation {
            from: Position::new(from)?,
            to: Position::new(to)?,
        })
    }

    /// Create a relocation from known-good constant cells.
    pub const fn from_raw(from: usize, to: usize) -> Self {
        Relocation {
            from: Position::from_raw(from),
            to: Position::from_raw(to),
        }
    }

    /// The relocation as a plain `(from, to)` pair.
    pub fn cells(&self) -> (usize, usize) {
        (self.from.value(), self.to.value())
    }
}

impl fmt::Display for Relocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_out_of_bounds() {
        assert!(Position::new(8).is_ok());
        assert!(matches!(
            Position::new(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn position_deserialization_is_validated() {
        let ok: Position = serde_json::from_str("4").expect("4 is a valid cell");
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<Position>("12").is_err());
    }

    #[test]
    fn relocation_displays_as_arrow() {
        let relocation = Relocation::new(7, 4).expect("valid cells");
        assert_eq!(relocation.to_string(), "7 -> 4");
        assert_eq!(relocation.cells(), (7, 4));
    }
}
