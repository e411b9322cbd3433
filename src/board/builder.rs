//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing a diagram.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Piece, PieceKind, Side, Square};
//!
//! let game = BoardBuilder::new()
//!     .piece(Square::new(7, 4).unwrap(), Piece::new(PieceKind::King, Side::White))
//!     .piece(Square::new(0, 4).unwrap(), Piece::new(PieceKind::King, Side::Black))
//!     .piece(Square::new(6, 0).unwrap(), Piece::new(PieceKind::Pawn, Side::White))
//!     .side_to_move(Side::Black)
//!     .build_game();
//! assert_eq!(game.side_to_move(), Side::Black);
//! ```

use super::{Board, GameState, Piece, RulesConfig, Side, Square};

/// A fluent builder for [`Board`] and [`GameState`] values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Side,
    config: RulesConfig,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Side::White,
            config: RulesConfig::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing any existing one.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.set_piece(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Set the rule variations used by the built game.
    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Build just the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }

    /// Build a game with nothing selected.
    #[must_use]
    pub fn build_game(self) -> GameState {
        GameState::from_position(self.board, self.side_to_move, self.config)
    }
}
