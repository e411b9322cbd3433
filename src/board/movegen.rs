//! Legal destination enumeration.
//!
//! A brute-force scan: every square other than the source is run through the
//! occupant's movement predicate, and squares held by the mover's own side are
//! dropped. Worst case is 63 predicate calls, each walking at most 7 squares.

use super::rules::rule_for;
use super::{side_of, Board, Square, SquareSet};

/// All squares the piece on `from` may move to, or an empty set if `from` is
/// empty.
///
/// Turn order is not consulted; highlighting an opponent's destinations is
/// the caller's call.
#[must_use]
pub fn legal_destinations(from: Square, board: &Board) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let rule = rule_for(piece.kind);

    let destinations: SquareSet = Square::all()
        .filter(|&to| to != from)
        .filter(|&to| rule(from, to, board, piece.side))
        .filter(|&to| side_of(board.piece_at(to)) != Some(piece.side))
        .collect();

    #[cfg(feature = "logging")]
    log::trace!(
        "{} on {} has {} destinations",
        piece,
        from,
        destinations.len()
    );

    destinations
}
