//! Command-line interface utilities and display functions
//!
//! This module provides CLI-related functionality including:
//! - Board rendering and the two-board layout used during a game
//! - The final summary printed when a game ends

#![cfg(feature = "std")]

pub mod interface;

// Re-export interface functions
pub use interface::*;

use std::string::String;

use crate::engine::game::{GameLoop, GameState, Side};

/// Final boards and the winner, for printing after `GameLoop::run`.
pub fn render_outcome(game: &GameLoop, a_name: &str, b_name: &str) -> String {
    let boards = render_pair(
        &format!("{} board:", a_name),
        game.board(Side::PlayerA),
        &format!("{} board:", b_name),
        game.board(Side::PlayerB),
    );
    let verdict = match game.state() {
        GameState::PlayerAWon => format!("{} wins!", a_name),
        GameState::PlayerBWon => format!("{} wins!", b_name),
        GameState::PlayerATurn | GameState::PlayerBTurn => String::from("Game unfinished."),
    };
    format!(
        "{}\n{}\n{}\nShots fired: {} {}, {} {}",
        "-".repeat(88),
        boards,
        verdict,
        a_name,
        game.shots_fired(Side::PlayerA),
        b_name,
        game.shots_fired(Side::PlayerB),
    )
}
