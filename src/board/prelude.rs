//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use capture_board::board::prelude::*;
//! ```

pub use super::{
    can_capture, generate_moves, is_valid_square, Bitboard, Board, Color, ColoredPiece, Piece,
    PlacementError, Square, SquareError,
};
