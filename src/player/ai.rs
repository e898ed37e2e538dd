use rand::Rng;

use crate::engine::{
    common::{ShotError, ShotResult},
    coordinate::Coordinate,
};

use super::{Player, PlayerError, TurnView};

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no history; repeated targets are rejected by the opponent board
/// and simply redrawn.
pub struct AiPlayer<R> {
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn produce_target(&mut self, view: &TurnView<'_>) -> Result<Coordinate, PlayerError> {
        let side = view.opponent.dimension() as i32;
        Ok(Coordinate::new(
            self.rng.random_range(0..side),
            self.rng.random_range(0..side),
        ))
    }

    fn handle_rejected_shot(
        &mut self,
        target: Coordinate,
        error: ShotError,
    ) -> Result<(), PlayerError> {
        log::trace!("computer redraws after {}: {}", target, error);
        Ok(())
    }

    fn handle_shot_result(
        &mut self,
        target: Coordinate,
        result: ShotResult,
    ) -> Result<(), PlayerError> {
        log::debug!("computer fired at {}: {}", target, result);
        Ok(())
    }
}
