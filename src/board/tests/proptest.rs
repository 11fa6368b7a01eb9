//! Property-based tests using proptest.

use crate::board::{
    can_capture, generate_moves, is_valid_square, to_coords, to_label, Board, ColoredPiece, Piece,
    PlacementError, Square,
};
use proptest::prelude::*;

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..64usize).prop_map(Square::from_index)
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![Just(Piece::Rook), Just(Piece::Knight)]
}

proptest! {
    /// Property: labels matching [a-h][1-8] are exactly the valid ones
    #[test]
    fn prop_validation_matches_pattern(label in "\\PC{0,3}") {
        let b = label.as_bytes();
        let expected = b.len() == 2
            && (b'a'..=b'h').contains(&b[0])
            && (b'1'..=b'8').contains(&b[1]);
        prop_assert_eq!(is_valid_square(&label), expected);
    }

    /// Property: coordinates survive label conversion
    #[test]
    fn prop_coords_roundtrip(col in 1..=8usize, row in 1..=8usize) {
        let label = to_label(col, row).unwrap();
        prop_assert!(is_valid_square(&label));
        prop_assert_eq!(to_coords(&label).unwrap(), (col, row));
    }

    /// Property: the origin is never reachable and sizes stay in range
    #[test]
    fn prop_reachable_set_shape(piece in piece_strategy(), from in square_strategy()) {
        let moves = generate_moves(piece, from);
        prop_assert!(!moves.contains(from));
        match piece {
            Piece::Rook => prop_assert_eq!(moves.len(), 14),
            Piece::Knight => prop_assert!((2..=8).contains(&moves.len())),
        }
    }

    /// Property: can_capture is exactly reachable-set membership
    #[test]
    fn prop_capture_is_membership(
        piece in piece_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        prop_assert_eq!(can_capture(piece, from, to), generate_moves(piece, from).contains(to));
    }

    /// Property: rook and knight reach is symmetric between two squares
    #[test]
    fn prop_reach_is_symmetric(piece in piece_strategy(), a in square_strategy(), b in square_strategy()) {
        prop_assert_eq!(can_capture(piece, a, b), can_capture(piece, b, a));
    }

    /// Property: the board holds one piece per distinct square and rejects repeats
    #[test]
    fn prop_board_single_occupancy(squares in proptest::collection::vec(square_strategy(), 1..40)) {
        let mut board = Board::new();
        let mut seen = std::collections::HashSet::new();
        for sq in squares {
            let result = board.add_piece(ColoredPiece::black(Piece::Knight), &sq.to_string());
            if seen.insert(sq) {
                prop_assert_eq!(result, Ok(sq));
            } else {
                prop_assert_eq!(result, Err(PlacementError::SquareOccupied { square: sq }));
            }
        }
        prop_assert_eq!(board.len(), seen.len());
    }
}
