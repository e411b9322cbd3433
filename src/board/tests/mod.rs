//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Per-kind movement predicates
//! - `movegen.rs` - Legal destination enumeration
//! - `game.rs` - Move acceptance, turn alternation and click selection
//! - `proptest.rs` - Property-based tests

mod movegen;
mod proptest;

use crate::board::{Board, Square};

pub(super) fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

pub(super) fn board(diagram: &str) -> Board {
    Board::from_diagram(diagram).unwrap()
}
