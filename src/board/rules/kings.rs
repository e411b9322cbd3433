use super::super::{Board, Side, Square};

/// One step in any direction. Also true for `from == to`.
pub(super) fn king_rule(from: Square, to: Square, _board: &Board, _side: Side) -> bool {
    let (dr, dc) = from.delta_to(to);
    dr.abs() <= 1 && dc.abs() <= 1
}
