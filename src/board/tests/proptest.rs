//! Property-based tests using proptest.

use crate::board::rules::is_pseudo_legal;
use crate::board::{
    attempt_move, legal_destinations, Board, Piece, PieceKind, Side, Square,
};
use proptest::prelude::*;

/// Strategy for an arbitrary square
fn square_strategy() -> impl Strategy<Value = Square> {
    (0..64usize).prop_map(|idx| Square::new(idx / 8, idx % 8).unwrap())
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    (0..6usize, any::<bool>()).prop_map(|(kind, white)| {
        let side = if white { Side::White } else { Side::Black };
        Piece::new(PieceKind::ALL[kind], side)
    })
}

/// Strategy for a sparse random board (roughly one square in four occupied)
fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::vec(proptest::option::weighted(0.25, piece_strategy()), 64).prop_map(
        |cells| {
            let mut board = Board::empty();
            for (idx, cell) in cells.into_iter().enumerate() {
                if let Some(piece) = cell {
                    board.set_piece(Square::new(idx / 8, idx % 8).unwrap(), piece);
                }
            }
            board
        },
    )
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Strategy for a straight or diagonal line of length 2 or more, with its unit step
fn line_strategy() -> impl Strategy<Value = (Square, Square, (isize, isize))> {
    (square_strategy(), 0..8usize, 2..8isize).prop_filter_map(
        "line leaves the board",
        |(from, dir, dist)| {
            let step = DIRECTIONS[dir];
            from.offset(step.0 * dist, step.1 * dist)
                .map(|to| (from, to, step))
        },
    )
}

/// Every (from, to) the side to move can play
fn all_moves(board: &Board, side: Side) -> Vec<(Square, Square)> {
    board
        .pieces()
        .filter(|(_, p)| p.side == side)
        .flat_map(|(from, _)| legal_destinations(from, board).iter().map(move |to| (from, to)))
        .collect()
}

proptest! {
    /// Property: enumeration and single-move validation agree on every square
    #[test]
    fn prop_enumeration_matches_validation(board in board_strategy()) {
        for (from, piece) in board.pieces() {
            let dests = legal_destinations(from, &board);
            for to in Square::all() {
                let outcome = attempt_move(from, to, &board, piece.side);
                prop_assert_eq!(outcome.accepted(), dests.contains(to), "{} -> {}", from, to);
            }
        }
    }

    /// Property: destinations never include the source or a friendly piece
    #[test]
    fn prop_destinations_exclude_source_and_friends(board in board_strategy()) {
        for (from, piece) in board.pieces() {
            for to in legal_destinations(from, &board) {
                prop_assert_ne!(to, from);
                prop_assert_ne!(board.piece_at(to).map(|p| p.side), Some(piece.side));
            }
        }
    }

    /// Property: sliders are blocked by any piece strictly between source and destination
    #[test]
    fn prop_sliders_blocked_by_intervening_piece(
        board in board_strategy(),
        (from, to, step) in line_strategy(),
        blocker in piece_strategy(),
    ) {
        let mut blocked = board;
        blocked.set_piece(from.offset(step.0, step.1).unwrap(), blocker);

        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            for side in Side::BOTH {
                prop_assert!(!is_pseudo_legal(kind, from, to, &blocked, side));
            }
        }
    }

    /// Property: knights and kings are indifferent to what stands in between
    #[test]
    fn prop_knight_and_king_ignore_blockers(
        from in square_strategy(),
        to in square_strategy(),
        board in board_strategy(),
    ) {
        let empty = Board::empty();
        for kind in [PieceKind::Knight, PieceKind::King] {
            for side in Side::BOTH {
                prop_assert_eq!(
                    is_pseudo_legal(kind, from, to, &board, side),
                    is_pseudo_legal(kind, from, to, &empty, side)
                );
            }
        }
    }

    /// Property: rejected moves change nothing, however often they are retried
    #[test]
    fn prop_rejection_is_idempotent(
        board in board_strategy(),
        from in square_strategy(),
        to in square_strategy(),
        white in any::<bool>(),
    ) {
        let side = if white { Side::White } else { Side::Black };
        let first = attempt_move(from, to, &board, side);
        prop_assume!(!first.accepted());
        let second = attempt_move(from, to, &first.board, first.side_to_move);
        prop_assert_eq!(first, second);
        prop_assert_eq!(second.board, board);
        prop_assert_eq!(second.side_to_move, side);
    }

    /// Property: random games from the starting position keep turn order and
    /// conserve the mover's material
    #[test]
    fn prop_random_walk_alternates_turns(seed in any::<u64>(), num_moves in 1..=40usize) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut side = Side::White;
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = all_moves(&board, side);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[rng.gen_range(0..moves.len())];
            let mover_count = board.count(side);
            let enemy_count = board.count(side.opponent());

            let outcome = attempt_move(from, to, &board, side);
            prop_assert!(outcome.accepted());
            prop_assert_eq!(outcome.side_to_move, side.opponent());
            prop_assert!(outcome.board.is_empty(from));
            prop_assert_eq!(outcome.board.piece_at(to), board.piece_at(from));
            prop_assert_eq!(outcome.board.count(side), mover_count);
            let lost = usize::from(outcome.captured.is_some());
            prop_assert_eq!(outcome.board.count(side.opponent()), enemy_count - lost);

            board = outcome.board;
            side = outcome.side_to_move;
        }
    }
}
