//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: uniform random targeting
//! - CliPlayer: interactive command-line player

use core::fmt;

use crate::engine::{
    board::Board,
    common::{ShotError, ShotResult},
    coordinate::Coordinate,
};

/// What a player can see when choosing a target.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// The player's own board.
    pub own: &'a Board,
    /// The board being fired at.
    pub opponent: &'a Board,
}

/// A shot the opponent board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub result: ShotResult,
}

/// Errors that end a player's turn without a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// The input source ran dry before a valid target was entered.
    InputClosed,
    /// Reading input or writing output failed.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::InputClosed => write!(f, "Input closed before a move was entered"),
            #[cfg(feature = "std")]
            PlayerError::Io(kind) => write!(f, "I/O error: {}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        PlayerError::Io(err.kind())
    }
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Choosing targets to fire at
/// - Handling feedback about its own and the opponent's shots
pub trait Player {
    /// Choose the next coordinate to fire at.
    fn produce_target(&mut self, view: &TurnView<'_>) -> Result<Coordinate, PlayerError>;

    /// Called once at the start of each of the player's turns.
    fn handle_turn_start(&mut self, _view: &TurnView<'_>) -> Result<(), PlayerError> {
        Ok(())
    }

    /// Called once at the start of each of the opponent's turns, with the
    /// view from this player's side of the table.
    fn handle_opponent_turn_start(&mut self, _view: &TurnView<'_>) -> Result<(), PlayerError> {
        Ok(())
    }

    /// The opponent board refused the last target; another one will be asked for.
    fn handle_rejected_shot(
        &mut self,
        _target: Coordinate,
        _error: ShotError,
    ) -> Result<(), PlayerError> {
        Ok(())
    }

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(
        &mut self,
        _target: Coordinate,
        _result: ShotResult,
    ) -> Result<(), PlayerError> {
        Ok(())
    }

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(
        &mut self,
        _target: Coordinate,
        _result: ShotResult,
    ) -> Result<(), PlayerError> {
        Ok(())
    }

    /// Fire at `opponent` until a shot is accepted.
    ///
    /// Out-of-bounds and repeated targets are reported through
    /// [`Player::handle_rejected_shot`] and asked for again.
    fn make_move(&mut self, own: &Board, opponent: &mut Board) -> Result<Shot, PlayerError> {
        loop {
            let target = self.produce_target(&TurnView {
                own,
                opponent: &*opponent,
            })?;
            match opponent.resolve_shot(target) {
                Ok(result) => {
                    self.handle_shot_result(target, result)?;
                    return Ok(Shot { target, result });
                }
                Err(e) => self.handle_rejected_shot(target, e)?,
            }
        }
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
