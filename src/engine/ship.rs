//! Ship definitions.

use core::fmt;

use crate::engine::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row and column step between consecutive ship cells.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight ship. Bounds are not checked here; the board does that at
/// placement time.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship starting at `origin`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero or does not fit in an `i32`.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0, "ship length must be positive");
        assert!(length <= i32::MAX as usize, "ship length out of range");
        Self {
            origin,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| self.origin.offset(dr * i, dc * i))
    }

    /// Whether `target` is one of the ship's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.occupied_cells().any(|cell| cell == target)
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged cells left.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Take one point of damage and return the hits left. Only the board
    /// calls this, once per distinct cell.
    pub(crate) fn absorb_hit(&mut self) -> usize {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
        self.remaining_hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.origin.row(),
            self.origin.col(),
            self.length,
            self.orientation,
            self.remaining_hits,
        )
    }
}
