//! Reachable-square generation.
//!
//! Moves here are pure geometry: the board is treated as empty, so a rook
//! sweeps its whole rank and file and a knight lands on every in-bounds
//! jump. Color plays no part.

use log::trace;

use super::attack_tables::{KNIGHT_ATTACKS, ROOK_LINES};
use super::{Bitboard, Piece, Square, SquareError};

/// Squares `piece` can reach from `from`. Never contains `from`.
#[must_use]
pub fn generate_moves(piece: Piece, from: Square) -> Bitboard {
    let targets = match piece {
        Piece::Rook => ROOK_LINES[from.as_index()],
        Piece::Knight => KNIGHT_ATTACKS[from.as_index()],
    };
    targets.without(from)
}

/// Label-level move generation for callers holding raw strings.
///
/// An unrecognised `kind` yields an empty set rather than an error;
/// rejecting unknown kinds is up to the caller. An invalid `label` is an
/// error.
pub fn generate_moves_str(kind: &str, label: &str) -> Result<Bitboard, SquareError> {
    let from: Square = label.parse()?;
    match kind.parse::<Piece>() {
        Ok(piece) => Ok(generate_moves(piece, from)),
        Err(e) => {
            trace!("no moves for {label}: {e}");
            Ok(Bitboard::EMPTY)
        }
    }
}
