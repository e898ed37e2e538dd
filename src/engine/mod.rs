//! Core game engine (no_std compatible)
//!
//! This module contains the pure game logic: coordinates, ships, boards,
//! fleet generation and the turn state machine. It needs only `alloc`,
//! `rand` and the `log` facade.

pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod fleet;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, CellState};
pub use common::{FleetError, InputError, PlacementError, ShotError, ShotResult};
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::FleetGenerator;
pub use game::{GameLoop, GameState, Side};
pub use ship::{Orientation, Ship};
