//! Random fleet generation.

use alloc::vec::Vec;
use rand::Rng;

use crate::engine::board::Board;
use crate::engine::common::FleetError;
use crate::engine::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPT_BUDGET};
use crate::engine::coordinate::Coordinate;
use crate::engine::ship::{Orientation, Ship};

/// Builds boards with a fixed list of ship lengths at random, non-touching
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetGenerator {
    dimension: usize,
    lengths: Vec<usize>,
    attempt_budget: usize,
}

impl FleetGenerator {
    /// Generator for `lengths` on a `dimension`-sided board, using the
    /// standard attempt budget.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    pub fn new(dimension: usize, lengths: &[usize]) -> Self {
        assert!(dimension > 0, "board dimension must be positive");
        Self {
            dimension,
            lengths: lengths.to_vec(),
            attempt_budget: PLACEMENT_ATTEMPT_BUDGET,
        }
    }

    /// Standard fleet on a `dimension`-sided board.
    pub fn standard(dimension: usize) -> Self {
        Self::new(dimension, &FLEET)
    }

    /// Override the number of placement attempts allowed per board.
    pub fn with_attempt_budget(mut self, budget: usize) -> Self {
        self.attempt_budget = budget;
        self
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Try to place the whole fleet on one fresh board.
    ///
    /// Origins are drawn over the full board, so ships near the far edge are
    /// rejected by the bounds check and redrawn. The budget counts attempts
    /// across all ships of the board, not per ship.
    pub fn try_build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, FleetError> {
        let mut board = Board::new(self.dimension);
        let side = self.dimension as i32;
        let mut attempts = 0usize;

        for &length in &self.lengths {
            loop {
                attempts += 1;
                if attempts > self.attempt_budget {
                    return Err(FleetError::BudgetExhausted {
                        placed: board.ships().len(),
                        requested: self.lengths.len(),
                    });
                }
                let origin = Coordinate::new(rng.random_range(0..side), rng.random_range(0..side));
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.place_ship(Ship::new(origin, length, orientation)) {
                    Ok(()) => break,
                    Err(e) => log::trace!("placement of length {} at {:?}: {}", length, origin, e),
                }
            }
        }

        board.reset_targeting();
        log::debug!("fleet placed after {} attempts", attempts);
        Ok(board)
    }

    /// Build boards until one holds the whole fleet.
    ///
    /// There is no bound on the number of restarts; the standard fleet on a
    /// board of at least `BOARD_SIZE` sides finishes after a handful.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        let mut restarts = 0usize;
        loop {
            match self.try_build(rng) {
                Ok(board) => return board,
                Err(e) => {
                    restarts += 1;
                    log::debug!("restarting fleet generation ({}): {}", restarts, e);
                }
            }
        }
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::standard(BOARD_SIZE)
    }
}
