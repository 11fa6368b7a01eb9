//! Board placement tests.

use super::sq;
use crate::board::{Board, Color, ColoredPiece, Piece, PlacementError, SquareError};

#[test]
fn test_add_to_empty_board() {
    let mut board = Board::new();
    assert!(board.is_empty());
    let placed = board.add_piece(ColoredPiece::white(Piece::Rook), "a1");
    assert_eq!(placed, Ok(sq("a1")));
    assert_eq!(board.len(), 1);
    assert_eq!(board.piece_at(sq("a1")), Some(ColoredPiece::white(Piece::Rook)));
}

#[test]
fn test_add_to_occupied_square_fails() {
    let mut board = Board::new();
    board.add_piece(ColoredPiece::white(Piece::Rook), "a1").unwrap();
    let err = board
        .add_piece(ColoredPiece::black(Piece::Knight), "a1")
        .unwrap_err();
    assert_eq!(err, PlacementError::SquareOccupied { square: sq("a1") });
    // The original occupant stays.
    assert_eq!(board.piece_at(sq("a1")), Some(ColoredPiece::white(Piece::Rook)));
    assert_eq!(board.len(), 1);
}

#[test]
fn test_add_invalid_square_fails() {
    let mut board = Board::new();
    for label in ["i1", "a9", "a", "a12"] {
        let err = board
            .add_piece(ColoredPiece::black(Piece::Rook), label)
            .unwrap_err();
        assert_eq!(
            err,
            PlacementError::InvalidSquare(SquareError::InvalidNotation {
                notation: label.to_string()
            })
        );
    }
    assert!(board.is_empty());
}

#[test]
fn test_add_piece_with_message() {
    let mut board = Board::new();
    assert_eq!(
        board.add_piece_with_message(ColoredPiece::white(Piece::Rook), "a1"),
        (true, "white_rook added at a1.".to_string())
    );
    assert_eq!(
        board.add_piece_with_message(ColoredPiece::black(Piece::Knight), "a1"),
        (false, "Position a1 is already occupied.".to_string())
    );
    assert_eq!(
        board.add_piece_with_message(ColoredPiece::black(Piece::Knight), "a9"),
        (
            false,
            "Invalid position. Please use format 'a1' to 'h8'.".to_string()
        )
    );
}

#[test]
fn test_pieces_iterate_in_square_order() {
    let mut board = Board::new();
    board.add_piece(ColoredPiece::black(Piece::Knight), "h8").unwrap();
    board.add_piece(ColoredPiece::white(Piece::Rook), "d4").unwrap();
    board.add_piece(ColoredPiece::black(Piece::Rook), "b1").unwrap();

    let squares: Vec<String> = board.pieces().map(|(s, _)| s.to_string()).collect();
    assert_eq!(squares, ["b1", "d4", "h8"]);

    let black: Vec<String> = board
        .pieces_of(Color::Black)
        .map(|(s, _)| s.to_string())
        .collect();
    assert_eq!(black, ["b1", "h8"]);
    assert_eq!(board.occupied().len(), 3);
    assert!(board.is_occupied(sq("d4")));
    assert!(!board.is_occupied(sq("d5")));
}

#[test]
fn test_same_pieces_are_interchangeable() {
    let mut board = Board::new();
    board.add_piece(ColoredPiece::black(Piece::Rook), "c3").unwrap();
    board.add_piece(ColoredPiece::black(Piece::Rook), "f6").unwrap();
    assert_eq!(board.piece_at(sq("c3")), board.piece_at(sq("f6")));
}

#[test]
fn test_colored_piece_names() {
    let wr = ColoredPiece::white(Piece::Rook);
    let bn = ColoredPiece::black(Piece::Knight);
    assert_eq!(wr.to_string(), "white_rook");
    assert_eq!(bn.to_string(), "black_knight");
    assert_eq!(wr.symbol(), "WR");
    assert_eq!(bn.symbol(), "BN");
    assert_eq!("black_knight".parse::<ColoredPiece>(), Ok(bn));
    assert!("black_bishop".parse::<ColoredPiece>().is_err());
    assert!("blackknight".parse::<ColoredPiece>().is_err());
    assert!("red_rook".parse::<ColoredPiece>().is_err());
}
