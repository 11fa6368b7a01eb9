//! Core board types.
//!
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds, colors, placed pieces
//! - `Square` - board square as (rank, file)
//! - `Bitboard` - 64-bit square set

mod bitboard;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;

pub(crate) use square::{FILES, RANKS};
