//! Per-kind movement predicates.
//!
//! Each predicate answers one question: can a piece of this kind, owned by
//! `side`, travel from `from` to `to` on `board`? They are pure reads of the
//! board and deliberately ignore whose turn it is and what sits on the
//! destination (except the pawn, whose captures depend on it). Turn and
//! friendly-destination checks belong to the callers in `movegen` and `game`.
//!
//! The predicates live in a table indexed by [`PieceKind::index`], so move
//! validation and destination enumeration dispatch through the same entry.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, PieceKind, Side, Square};

/// Signature shared by every movement predicate.
pub type MoveRule = fn(from: Square, to: Square, board: &Board, side: Side) -> bool;

/// Predicates in [`PieceKind::ALL`] order.
const RULES: [MoveRule; 6] = [
    pawns::pawn_rule,
    knights::knight_rule,
    sliders::bishop_rule,
    sliders::rook_rule,
    sliders::queen_rule,
    kings::king_rule,
];

/// The movement predicate for `kind`.
#[inline]
#[must_use]
pub fn rule_for(kind: PieceKind) -> MoveRule {
    RULES[kind.index()]
}

/// Pseudo-legal movement check for a piece of `kind` owned by `side`.
///
/// The King's predicate accepts `from == to`; callers that treat that as a
/// move must reject it themselves.
#[inline]
#[must_use]
pub fn is_pseudo_legal(
    kind: PieceKind,
    from: Square,
    to: Square,
    board: &Board,
    side: Side,
) -> bool {
    rule_for(kind)(from, to, board, side)
}
