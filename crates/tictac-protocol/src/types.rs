//! Core value types that travel on the wire.
//!
//! Everything here has a textual symbol on the wire (`X`, `O`, `S`, or the
//! empty string for a free cell). `FromStr` parses that symbol, `Display`
//! prints it back, so a decoded frame can be re-rendered exactly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Field delimiter inside a frame. Never legal inside a field value.
pub const DELIMITER: char = '|';

/// Separator between the cells of a board field.
pub const CELL_SEPARATOR: char = ',';

/// Number of cells on the board (3x3).
pub const BOARD_CELLS: usize = 9;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The identity the server gives a connection: one of the two players,
/// or a spectator.
///
/// On the wire the spectator is `S`. The `#[serde(rename)]` keeps the
/// JSON form identical to the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    X,
    O,
    #[serde(rename = "S")]
    Spectator,
}

impl Role {
    /// The wire symbol for this role.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
            Self::Spectator => "S",
        }
    }

    /// Returns `true` for `X` and `O`, the roles that may move.
    pub fn is_player(self) -> bool {
        matches!(self, Self::X | Self::O)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Role {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Self::X),
            "O" => Ok(Self::O),
            "S" => Ok(Self::Spectator),
            other => Err(ProtocolError::UnknownRole(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// Contents of one board square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The wire symbol for this cell. An empty cell is the empty string.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::X => "X",
            Self::O => "O",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Cell {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Empty),
            "X" => Ok(Self::X),
            "O" => Ok(Self::O),
            other => Err(ProtocolError::UnknownCell(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CellIndex
// ---------------------------------------------------------------------------

/// Position of a square, counted left-to-right, top-to-bottom from 0.
///
/// Outbound moves carry whatever index the user clicked. Range and
/// occupancy are the server's business, so nothing here rejects an
/// index above 8.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CellIndex(pub usize);

impl CellIndex {
    /// Returns `true` if the index names one of the nine squares.
    pub fn is_on_board(self) -> bool {
        self.0 < BOARD_CELLS
    }
}

impl From<usize> for CellIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A full snapshot of the nine squares.
///
/// The array type makes "exactly nine cells" impossible to violate once a
/// `Board` exists; the only place the count can be wrong is the wire
/// text, which [`Board::from_str`] checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
pub struct Board([Cell; BOARD_CELLS]);

impl Board {
    /// The all-empty board, sent before the second player joins.
    pub const EMPTY: Self = Self([Cell::Empty; BOARD_CELLS]);

    pub fn new(cells: [Cell; BOARD_CELLS]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.0
    }

    /// Returns the cell at `index`, or `None` if it is off the board.
    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.0.get(index.0).copied()
    }

    /// Iterates `(index, cell)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        self.0.iter().enumerate().map(|(i, c)| (CellIndex(i), *c))
    }

    /// Returns `true` if this is the `,,,,,,,,` sentinel board.
    ///
    /// The protocol has no "game started" flag. An all-empty snapshot is
    /// the only hint that the opponent has not joined yet.
    pub fn is_empty_sentinel(&self) -> bool {
        self.0.iter().all(|c| c.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{CELL_SEPARATOR}")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(CELL_SEPARATOR).collect();
        if fields.len() != BOARD_CELLS {
            return Err(ProtocolError::CellCount {
                expected: BOARD_CELLS,
                found: fields.len(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (slot, field) in cells.iter_mut().zip(fields) {
            *slot = field.parse()?;
        }
        Ok(Self(cells))
    }
}
