//! Board representation, move generation and capture evaluation.
//!
//! Movement is simplified: a rook sweeps its entire rank and file with no
//! blocking, a knight jumps to every in-bounds L offset. Capturing is a
//! reachability test only; the board is never changed by it.
//!
//! # Example
//! ```
//! use capture_board::board::{can_capture, Board, ColoredPiece, Piece};
//!
//! let mut board = Board::new();
//! let rook = board.add_piece(ColoredPiece::white(Piece::Rook), "a1").unwrap();
//! let knight = board.add_piece(ColoredPiece::black(Piece::Knight), "a8").unwrap();
//! assert!(can_capture(Piece::Rook, rook, knight));
//! ```

mod attack_tables;
mod capture;
mod coords;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use capture::{can_capture, can_capture_str};
pub use coords::{is_valid_square, to_coords, to_label};
pub use error::{PieceParseError, PlacementError, SquareError};
pub use movegen::{generate_moves, generate_moves_str};
pub use state::Board;
pub(crate) use state::placed_message;
pub use types::{Bitboard, BitboardIter, Color, ColoredPiece, Piece, Square};
