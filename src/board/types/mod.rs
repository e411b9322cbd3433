//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Side` - what occupies a square and who owns it
//! - `Square` - a bounds-checked (row, col) coordinate
//! - `SquareSet` - 64-bit set of squares, used for destination sets

mod piece;
mod square;
mod square_set;

pub use piece::{side_of, Piece, PieceKind, Side};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
