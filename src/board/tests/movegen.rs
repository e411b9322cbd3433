//! Destination enumeration tests.

use super::{board, sq};
use crate::board::{legal_destinations, Board, Side, Square, SquareSet};

fn set(squares: &[(usize, usize)]) -> SquareSet {
    squares.iter().map(|&(r, c)| sq(r, c)).collect()
}

#[test]
fn test_knight_on_starting_position() {
    let b = Board::new();
    assert_eq!(legal_destinations(sq(7, 1), &b), set(&[(5, 0), (5, 2)]));
    assert_eq!(legal_destinations(sq(0, 6), &b), set(&[(2, 5), (2, 7)]));
}

#[test]
fn test_starting_position_totals() {
    let b = Board::new();
    for side in Side::BOTH {
        let total: usize = b
            .pieces()
            .filter(|(_, p)| p.side == side)
            .map(|(from, _)| legal_destinations(from, &b).len())
            .sum();
        assert_eq!(total, 20, "{side} should have 20 moves");
    }
}

#[test]
fn test_empty_square_has_no_destinations() {
    let b = Board::new();
    assert!(legal_destinations(sq(4, 4), &b).is_empty());
}

#[test]
fn test_blocked_pieces_have_no_destinations() {
    let b = Board::new();
    for from in [sq(7, 0), sq(7, 2), sq(7, 3), sq(7, 4), sq(0, 3)] {
        assert!(legal_destinations(from, &b).is_empty(), "{from}");
    }
}

#[test]
fn test_rook_captures_enemy_but_not_friend() {
    let b = board(
        "
        ........
        ........
        ........
        ........
        R..p....
        ........
        P.......
        ........
        ",
    );
    let dests = legal_destinations(sq(4, 0), &b);
    assert!(dests.contains(sq(4, 3)));
    assert!(!dests.contains(sq(4, 4)));
    assert!(dests.contains(sq(5, 0)));
    assert!(!dests.contains(sq(6, 0)));
    assert!(dests.contains(sq(0, 0)));
    // up 4, down 1, right 3
    assert_eq!(dests.len(), 8);
}

#[test]
fn test_king_excludes_own_square_and_friends() {
    let b = board(
        "
        ........
        ........
        ........
        ...P....
        ...K....
        ........
        ........
        ........
        ",
    );
    let dests = legal_destinations(sq(4, 3), &b);
    assert!(!dests.contains(sq(4, 3)));
    assert!(!dests.contains(sq(3, 3)));
    assert_eq!(dests.len(), 7);
}

#[test]
fn test_pawn_destinations_include_captures() {
    let b = board(
        "
        ........
        ........
        ........
        ........
        ........
        .n.b....
        ..P.....
        ........
        ",
    );
    assert_eq!(
        legal_destinations(sq(6, 2), &b),
        set(&[(5, 1), (5, 2), (4, 2), (5, 3)])
    );
}

#[test]
fn test_enumeration_ignores_turn() {
    // Black pieces can be inspected while White is to move
    let b = Board::new();
    assert_eq!(legal_destinations(sq(1, 0), &b), set(&[(2, 0), (3, 0)]));
}

#[test]
fn test_never_contains_source_or_friend_anywhere() {
    let b = board(
        "
        ♜♞♝.♚♝♞♜
        ♟♟.♟.♟♟♟
        ..♟.....
        ....♟...
        ...♙♙..♛
        .....♘..
        ♙♙♙..♙♙♙
        ♖♘♗♕♔♗.♖
        ",
    );
    for (from, piece) in b.pieces() {
        for to in legal_destinations(from, &b) {
            assert_ne!(to, from);
            assert_ne!(b.piece_at(to).map(|p| p.side), Some(piece.side));
        }
    }
    let queen: Vec<Square> = legal_destinations(sq(4, 7), &b).iter().collect();
    assert!(queen.contains(&sq(6, 5)));
    assert!(!queen.contains(&sq(7, 4)));
}
