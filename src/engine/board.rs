//! Game board state: grid, ships, placement exclusion and shot bookkeeping.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::engine::common::{PlacementError, ShotError, ShotResult};
use crate::engine::config::BOARD_SIZE;
use crate::engine::coordinate::Coordinate;
use crate::engine::ship::Ship;

/// What a grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Ship,
    Miss,
    Hit,
    /// Sealed-off water around a sunk ship.
    DestroyedMargin,
}

/// One player's board.
///
/// Two coordinate sets back the "marked" bookkeeping:
/// `blocked` holds ship cells and their margin and rejects new placements,
/// `targeted` holds shot cells and sunk-ship margins and rejects new shots.
#[derive(Debug, Clone)]
pub struct Board {
    dimension: usize,
    grid: Vec<CellState>,
    ships: Vec<Ship>,
    blocked: BTreeSet<Coordinate>,
    targeted: BTreeSet<Coordinate>,
    destroyed: usize,
    reveal_ships: bool,
}

impl Board {
    /// Create an empty `dimension`×`dimension` board with ships revealed.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            grid: vec![CellState::Empty; dimension * dimension],
            ships: Vec::new(),
            blocked: BTreeSet::new(),
            targeted: BTreeSet::new(),
            destroyed: 0,
            reveal_ships: true,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether `c` lies outside `[0, dimension)` on either axis.
    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        self.index(c).is_none()
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        let row = usize::try_from(c.row()).ok()?;
        let col = usize::try_from(c.col()).ok()?;
        if row < self.dimension && col < self.dimension {
            Some(row * self.dimension + col)
        } else {
            None
        }
    }

    /// State of the cell at `c`, or `None` when out of bounds.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        self.index(c).map(|i| self.grid[i])
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        // `max(1)` keeps `chunks` happy on a zero-sized board
        self.grid.chunks(self.dimension.max(1))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships with no undamaged cells left.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Whether undamaged ship cells should be drawn.
    pub fn reveal_ships(&self) -> bool {
        self.reveal_ships
    }

    pub fn set_reveal_ships(&mut self, reveal: bool) {
        self.reveal_ships = reveal;
    }

    /// Whether a new ship may not cover `c`.
    pub fn blocks_placement(&self, c: Coordinate) -> bool {
        self.blocked.contains(&c)
    }

    /// Whether a new shot at `c` would be rejected as already targeted.
    pub fn was_targeted(&self, c: Coordinate) -> bool {
        self.targeted.contains(&c)
    }

    /// Place `ship`, then reserve its 8-connected margin so that no other
    /// ship can touch it. Cells already fired at count as taken.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        for cell in ship.occupied_cells() {
            if self.is_out_of_bounds(cell) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.blocked.contains(&cell) || self.targeted.contains(&cell) {
                return Err(PlacementError::Overlap);
            }
        }
        for cell in ship.occupied_cells() {
            self.set_cell(cell, CellState::Ship);
            self.blocked.insert(cell);
        }
        let margin = self.margin_of(&ship);
        self.blocked.extend(margin);
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `target`.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotResult, ShotError> {
        let idx = self.index(target).ok_or(ShotError::OutOfBounds)?;
        if !self.targeted.insert(target) {
            return Err(ShotError::AlreadyTargeted);
        }

        let Some(pos) = self.ships.iter().position(|s| s.is_hit_by(target)) else {
            self.grid[idx] = CellState::Miss;
            return Ok(ShotResult::Miss);
        };

        self.grid[idx] = CellState::Hit;
        if self.ships[pos].absorb_hit() > 0 {
            return Ok(ShotResult::Hit);
        }

        self.destroyed += 1;
        let margin = self.margin_of(&self.ships[pos]);
        for cell in margin {
            if self.targeted.insert(cell) {
                self.set_cell(cell, CellState::DestroyedMargin);
            }
        }
        log::debug!("ship sunk: {:?}", self.ships[pos]);
        Ok(ShotResult::Sunk)
    }

    /// Returns `true` once every placed ship is sunk.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Forget every targeted cell. Placement reservations stay. Meant for
    /// the moment between fleet generation and the first shot.
    pub fn reset_targeting(&mut self) {
        self.targeted.clear();
    }

    /// In-bounds cells around `ship` that are not part of it.
    fn margin_of(&self, ship: &Ship) -> Vec<Coordinate> {
        let mut margin = Vec::new();
        for cell in ship.occupied_cells() {
            for n in cell.neighbors() {
                if !self.is_out_of_bounds(n) && !ship.is_hit_by(n) && !margin.contains(&n) {
                    margin.push(n);
                }
            }
        }
        margin
    }

    fn set_cell(&mut self, c: Coordinate, state: CellState) {
        if let Some(i) = self.index(c) {
            self.grid[i] = state;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}
