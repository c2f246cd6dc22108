//! Board representation: sides, pieces, live boards and abstract signatures

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::symmetry;
use crate::types::{Position, Relocation};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// One of the two competing sides.
///
/// `A` starts on row 2 and advances toward row 0; `H` starts on row 0 and
/// advances toward row 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    H,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::H,
            Side::H => Side::A,
        }
    }

    /// Convert side to signature cell
    pub fn to_cell(self) -> Cell {
        match self {
            Side::A => Cell::A,
            Side::H => Cell::H,
        }
    }

    /// The row this side must reach to win.
    pub fn goal_row(self) -> usize {
        match self {
            Side::A => 0,
            Side::H => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A slot of an abstract signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    A,
    H,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'A',
            Cell::H => 'H',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '0' | '_' => Some(Cell::Empty),
            'A' | 'a' | 'B' | 'b' => Some(Cell::A),
            'H' | 'h' => Some(Cell::H),
            _ => None,
        }
    }

    /// The side occupying this slot, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Side::A),
            Cell::H => Some(Side::H),
        }
    }
}

/// A board reduced to {empty, A, H}, discarding piece identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(pub [Cell; CELLS]);

impl Signature {
    pub const fn new(cells: [Cell; CELLS]) -> Self {
        Signature(cells)
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.0
    }

    pub fn get(&self, position: Position) -> Cell {
        self.0[position.value()]
    }

    /// Left-right mirror image: every row is reversed independently.
    pub fn mirror(&self) -> Signature {
        let mut mirrored = [Cell::Empty; CELLS];
        for (index, cell) in self.0.iter().enumerate() {
            mirrored[symmetry::mirror_index(index)] = *cell;
        }
        Signature(mirrored)
    }

    /// Whether any piece of `side` remains.
    pub fn contains(&self, side: Side) -> bool {
        self.0.contains(&side.to_cell())
    }

    /// Whether any piece of `side` sits in `row`.
    pub fn side_in_row(&self, side: Side, row: usize) -> bool {
        self.0[row * 3..row * 3 + 3].contains(&side.to_cell())
    }

    /// Cells occupied by `side`, in index order.
    pub fn positions_of(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        let target = side.to_cell();
        self.0
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == target)
            .map(|(index, _)| index)
    }

    /// Compact string form, e.g. `.HHH..AAA`.
    pub fn encode(&self) -> String {
        self.0.iter().map(|cell| cell.to_char()).collect()
    }
}

impl FromStr for Signature {
    type Err = crate::Error;

    /// Parse nine cell characters; whitespace and `/` row separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Signature(cells))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// A pawn on the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    /// Identity within its side; ignored by the engine.
    pub id: u8,
}

impl Piece {
    pub fn new(side: Side, id: u8) -> Self {
        Piece { side, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side, self.id)
    }
}

/// The live board held by the game driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Option<Piece>; CELLS],
}

impl Board {
    /// Standard opening: H pawns on row 0, A pawns on row 2.
    pub fn new() -> Self {
        let mut cells = [None; CELLS];
        for col in 0..3 {
            cells[col] = Some(Piece::new(Side::H, col as u8));
            cells[6 + col] = Some(Piece::new(Side::A, col as u8));
        }
        Board { cells }
    }

    /// An empty board.
    pub fn empty() -> Self {
        Board {
            cells: [None; CELLS],
        }
    }

    /// Build a live board from a signature, numbering each side's pieces in index order.
    pub fn from_signature(signature: &Signature) -> Self {
        let mut cells = [None; CELLS];
        let (mut next_a, mut next_h) = (0u8, 0u8);
        for (index, cell) in signature.cells().iter().enumerate() {
            cells[index] = match cell.side() {
                Some(Side::A) => {
                    next_a += 1;
                    Some(Piece::new(Side::A, next_a - 1))
                }
                Some(Side::H) => {
                    next_h += 1;
                    Some(Piece::new(Side::H, next_h - 1))
                }
                None => None,
            };
        }
        Board { cells }
    }

    pub fn get(&self, position: Position) -> Option<Piece> {
        self.cells[position.value()]
    }

    /// Reduce to an abstract signature.
    pub fn signature(&self) -> Signature {
        let mut cells = [Cell::Empty; CELLS];
        for (index, piece) in self.cells.iter().enumerate() {
            if let Some(piece) = piece {
                cells[index] = piece.side.to_cell();
            }
        }
        Signature(cells)
    }

    /// Move the occupant of `from` onto `to`, clearing `from`.
    ///
    /// Returns whatever previously occupied `to`.
    pub fn relocate(&mut self, relocation: Relocation) -> Option<Piece> {
        let (from, to) = relocation.cells();
        let captured = self.cells[to];
        self.cells[to] = self.cells[from].take();
        captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match self.cells[index] {
                        Some(piece) => format!(" {} ", piece.side),
                        None => format!("({index})"),
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_board_has_three_pawns_each() {
        let board = Board::new();
        let signature = board.signature();
        assert_eq!(signature.encode(), "HHH...AAA");
        assert_eq!(signature.positions_of(Side::A).collect::<Vec<_>>(), [6, 7, 8]);
    }

    #[test]
    fn parse_accepts_row_separators_and_bot_marker() {
        let signature: Signature = ".HH/H../BBB".parse().expect("valid signature");
        assert_eq!(signature.encode(), ".HHH..AAA");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "HHH...AA".parse::<Signature>(),
            Err(crate::Error::InvalidBoardLength { got: 8, .. })
        ));
        assert!(matches!(
            "HHH...AAX".parse::<Signature>(),
            Err(crate::Error::InvalidCellCharacter {
                character: 'X',
                position: 8,
                ..
            })
        ));
    }

    #[test]
    fn mirror_reverses_each_row() {
        let signature: Signature = "H.A/.H./AA.".parse().unwrap();
        assert_eq!(signature.mirror().encode(), "A.H.H..AA");
    }

    #[test]
    fn relocate_returns_captured_piece() {
        let mut board = Board::from_signature(&"...H../.AA".parse().unwrap());
        let captured = board.relocate(Relocation::from_raw(7, 3));
        assert_eq!(captured, Some(Piece::new(Side::H, 0)));
        assert_eq!(board.signature().encode(), "...A....A");
    }

    #[test]
    fn from_signature_round_trips() {
        let signature: Signature = "H.H.A...A".parse().unwrap();
        let board = Board::from_signature(&signature);
        assert_eq!(board.signature(), signature);
        assert_eq!(board.cells[8], Some(Piece::new(Side::A, 1)));
    }
}
