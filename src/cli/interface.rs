#![cfg(feature = "std")]

//! Text rendering of boards. Everything here only reads a `Board`.

use std::fmt::Write as _;
use std::string::String;

use crate::engine::board::{Board, CellState};

/// Glyph shown for a cell. Undamaged ship cells are drawn as water unless
/// `reveal_ships` is set.
pub fn glyph(state: CellState, reveal_ships: bool) -> char {
    match state {
        CellState::Empty => ' ',
        CellState::Ship if reveal_ships => '■',
        CellState::Ship => ' ',
        CellState::Miss => 'o',
        CellState::Hit => 'X',
        CellState::DestroyedMargin => '.',
    }
}

/// Render a board as a numbered grid, one-based like the input format.
pub fn render_board(board: &Board) -> String {
    let n = board.dimension();
    let mut out = String::new();

    out.push_str("   |");
    for c in 0..n {
        let _ = write!(out, "{:^3}|", c + 1);
    }
    out.push('\n');
    push_separator(&mut out, n);

    for (r, row) in board.rows().enumerate().take(n) {
        let _ = write!(out, "{:>2} |", r + 1);
        for &state in row {
            let _ = write!(out, " {} |", glyph(state, board.reveal_ships()));
        }
        out.push('\n');
        push_separator(&mut out, n);
    }
    out.pop();
    out
}

fn push_separator(out: &mut String, n: usize) {
    out.push_str("   +");
    for _ in 0..n {
        out.push_str("---+");
    }
    out.push('\n');
}

/// Lay two multi-line blocks next to each other, padding the shorter one.
pub fn side_by_side(left: &str, right: &str) -> String {
    let left_lines: Vec<&str> = left.lines().collect();
    let right_lines: Vec<&str> = right.lines().collect();
    let width = left_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let height = left_lines.len().max(right_lines.len());

    let mut out = String::new();
    for i in 0..height {
        let l = left_lines.get(i).copied().unwrap_or("");
        let r = right_lines.get(i).copied().unwrap_or("");
        let _ = writeln!(out, " {:width$}   |:|   {}", l, r, width = width);
    }
    out
}

/// Both boards of a turn, own board on the left.
pub fn render_pair(own_title: &str, own: &Board, other_title: &str, other: &Board) -> String {
    let left = format!("{}\n\n{}", own_title, render_board(own));
    let right = format!("{}\n\n{}", other_title, render_board(other));
    side_by_side(&left, &right)
}

/// Text shown when an interactive game starts.
pub fn greeting() -> &'static str {
    "\
+++++++++++++++++++++++++++++++++++++++++++++
           Welcome to Sea Battle!
+++++++++++++++++++++++++++++++++++++++++++++
 Take turns firing at the computer's fleet.
 A move is two numbers: row, then column.
 A hit or a sunk ship earns another shot.
 Sink every enemy ship to win.
+++++++++++++++++++++++++++++++++++++++++++++"
}
