//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = GameState::new();
//! game.click(Square::new(6, 4).unwrap());
//! assert_eq!(game.destinations().len(), 2);
//! ```

pub use super::{
    attempt_move, initial_board, legal_destinations, side_of, Board, BoardBuilder, ClickOutcome,
    GameState, MoveOutcome, Piece, PieceKind, Rejection, RulesConfig, Side, Square, SquareSet,
};
