//! Board representation and move legality.
//!
//! Movement follows the basic piece patterns with path blocking and capture
//! colour checks. There is no notion of check, castling, en passant or
//! promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{attempt_move, initial_board, legal_destinations, Side, Square};
//!
//! let board = initial_board();
//! let knight = Square::new(7, 1).unwrap();
//! assert_eq!(legal_destinations(knight, &board).len(), 2);
//!
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//! let outcome = attempt_move(e2, e4, &board, Side::White);
//! assert!(outcome.accepted());
//! assert_eq!(outcome.side_to_move, Side::Black);
//! ```

mod builder;
mod config;
mod diagram;
mod error;
mod game;
mod movegen;
pub mod prelude;
pub mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use config::{FriendlyCapture, RulesConfig};
pub use error::{DiagramError, Rejection, SquareError};
pub use game::{attempt_move, attempt_move_with, ClickOutcome, GameState, MoveOutcome};
pub use movegen::legal_destinations;
pub use state::{initial_board, Board};
pub use types::{side_of, Piece, PieceKind, Side, Square, SquareSet, SquareSetIter};
