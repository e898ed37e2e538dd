//! Grid coordinates.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::engine::common::InputError;

/// Offsets of the 8-connected ring around a cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-based (row, column) position.
///
/// Axes are signed: margins and decoded user input may step outside the
/// board, and it is up to the board to reject such positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// This coordinate translated by (`d_row`, `d_col`), saturating at the
    /// `i32` limits.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self::new(
            self.row.saturating_add(d_row),
            self.col.saturating_add(d_col),
        )
    }

    /// The 8 surrounding coordinates, in row-major order. Some of them may be
    /// out of bounds for any given board.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Decode a typed target of the form `"<row> <col>"` with one-based
    /// numbers into a 0-based coordinate.
    ///
    /// Only the shape of the input is checked here. A `0` is accepted and
    /// decodes to `-1`, which the board later rejects as out of bounds.
    pub fn parse_one_based(input: &str) -> Result<Self, InputError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(InputError::WrongTokenCount(tokens.len()));
        }
        let row = parse_index(tokens[0])?;
        let col = parse_index(tokens[1])?;
        Ok(Self::new(row - 1, col - 1))
    }
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// One-based, as the player types it.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
