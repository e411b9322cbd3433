pub mod board;

pub use board::{
    attempt_move, initial_board, legal_destinations, side_of, Board, GameState, MoveOutcome,
    Piece, PieceKind, Side, Square, SquareSet,
};
