use super::super::{side_of, Board, Side, Square};

/// Forward pushes and diagonal captures, first matching case wins:
/// a single step onto an empty square, a double step from the start row over
/// two empty squares, or a single diagonal step onto an enemy piece.
pub(super) fn pawn_rule(from: Square, to: Square, board: &Board, side: Side) -> bool {
    let dir = side.pawn_direction();
    let (dr, dc) = from.delta_to(to);

    if dr == dir && dc == 0 && board.is_empty(to) {
        return true;
    }

    if from.row() == side.pawn_start_row() && dr == 2 * dir && dc == 0 {
        let Some(between) = from.offset(dir, 0) else {
            return false;
        };
        if board.is_empty(between) && board.is_empty(to) {
            return true;
        }
    }

    // No en passant: the target square itself must hold an enemy piece.
    if dr == dir && dc.abs() == 1 {
        if let Some(target) = side_of(board.piece_at(to)) {
            return target != side;
        }
    }

    false
}
