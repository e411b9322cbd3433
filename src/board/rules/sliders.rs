use super::super::{Board, Side, Square};

/// Diagonal move of any length over empty squares.
pub(super) fn bishop_rule(from: Square, to: Square, board: &Board, _side: Side) -> bool {
    let (dr, dc) = from.delta_to(to);
    dr != 0 && dr.abs() == dc.abs() && is_path_clear(from, to, board)
}

/// Straight move of any length along a row or column over empty squares.
pub(super) fn rook_rule(from: Square, to: Square, board: &Board, _side: Side) -> bool {
    let (dr, dc) = from.delta_to(to);
    (dr == 0) != (dc == 0) && is_path_clear(from, to, board)
}

pub(super) fn queen_rule(from: Square, to: Square, board: &Board, side: Side) -> bool {
    bishop_rule(from, to, board, side) || rook_rule(from, to, board, side)
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Requires a pure diagonal or straight delta; the scan stops only once both
/// coordinates have reached `to`.
fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = from.delta_to(to);
    debug_assert!(dr == 0 || dc == 0 || dr.abs() == dc.abs());
    let step = (dr.signum(), dc.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }

    // Walked off the board without meeting `to`
    false
}
