pub mod board;
pub mod session;

pub use board::{can_capture, generate_moves, Board, Color, ColoredPiece, Piece, Square};
pub use session::{Session, SessionConfig};
