//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, Coordinate, FleetGenerator, GameLoop, GameState, Orientation, Player, Ship,
    ShotError, ShotResult, Side,
};

#[cfg(feature = "std")]
pub use crate::{render_board, render_outcome, render_pair, CliPlayer};
