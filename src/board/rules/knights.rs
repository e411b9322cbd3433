use super::super::{Board, Side, Square};

/// L-shaped jump; intervening pieces are irrelevant.
pub(super) fn knight_rule(from: Square, to: Square, _board: &Board, _side: Side) -> bool {
    let (dr, dc) = from.delta_to(to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}
