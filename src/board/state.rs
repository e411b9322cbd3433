use super::{Piece, PieceKind, Side, Square};

/// Back rank layout from column 0 to column 7
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[row][col]`.
///
/// The board knows nothing about whose turn it is; that lives in
/// [`GameState`](super::GameState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            for side in Side::BOTH {
                board.squares[side.back_row()][col] = Some(Piece::new(kind, side));
                board.squares[side.pawn_start_row()][col] =
                    Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Puts `piece` on `sq`, returning whatever was there before.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].replace(piece)
    }

    /// Empties `sq`, returning whatever was there before.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of pieces of `side` on the board.
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, p)| p.side == side).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// The standard starting position.
pub fn initial_board() -> Board {
    Board::new()
}
