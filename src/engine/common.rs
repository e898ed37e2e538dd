//! Common types for the engine: shot results and the error kinds raised by
//! placement, shooting, fleet generation and input decoding.

use alloc::string::String;
use core::fmt;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on water.
    Miss,
    /// Shot damaged a ship that still floats.
    Hit,
    /// Shot took the last undamaged cell of a ship.
    Sunk,
}

impl ShotResult {
    /// A hit or a sink lets the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Miss => write!(f, "miss"),
            ShotResult::Hit => write!(f, "hit"),
            ShotResult::Sunk => write!(f, "ship destroyed"),
        }
    }
}

/// Errors returned by `Board::place_ship`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship cell lies outside the board.
    OutOfBounds,
    /// A ship cell touches another ship or its margin.
    Overlap,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => {
                write!(f, "Ship placement overlaps another ship or its margin")
            }
        }
    }
}

/// Errors returned by `Board::resolve_shot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds,
    /// Target was already shot at, or sealed off around a sunk ship.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "That shot lands outside the board"),
            ShotError::AlreadyTargeted => write!(f, "You have already fired at that cell"),
        }
    }
}

/// Errors returned by `FleetGenerator::try_build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// The attempt budget ran out with only `placed` of `requested` ships on
    /// the board.
    BudgetExhausted { placed: usize, requested: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::BudgetExhausted { placed, requested } => write!(
                f,
                "Placement budget exhausted after placing {} of {} ships",
                placed, requested
            ),
        }
    }
}

/// Errors produced while decoding a typed target such as `"3 7"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Line did not contain exactly two tokens.
    WrongTokenCount(usize),
    /// Token is not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "Enter exactly 2 coordinates (got {})", n)
            }
            InputError::NotANumber(token) => write!(f, "'{}' is not a number", token),
        }
    }
}
