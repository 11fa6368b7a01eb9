use log::debug;

use super::{Bitboard, Color, ColoredPiece, PlacementError, Square};

/// Board state: at most one piece per square.
///
/// The board only grows. Pieces are added with [`Board::add_piece`] and are
/// never moved, replaced or removed; captures are computed, not played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<ColoredPiece>; 64],
    occupied: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn new() -> Self {
        Board {
            squares: [None; 64],
            occupied: Bitboard::EMPTY,
        }
    }

    /// Place `piece` on the square named by `label`.
    ///
    /// Fails with [`PlacementError::InvalidSquare`] for a malformed label and
    /// [`PlacementError::SquareOccupied`] if the square is taken. The board is
    /// unchanged on failure.
    pub fn add_piece(&mut self, piece: ColoredPiece, label: &str) -> Result<Square, PlacementError> {
        let square: Square = label.parse()?;
        self.add_piece_at(piece, square)?;
        Ok(square)
    }

    /// Place `piece` on an already-validated square.
    pub fn add_piece_at(&mut self, piece: ColoredPiece, square: Square) -> Result<(), PlacementError> {
        if self.occupied.contains(square) {
            debug!("rejected {piece} at {square}: occupied");
            return Err(PlacementError::SquareOccupied { square });
        }
        self.squares[square.as_index()] = Some(piece);
        self.occupied = self.occupied.with(square);
        debug!("placed {piece} at {square}");
        Ok(())
    }

    /// [`Board::add_piece`] flattened to a success flag and a user-facing message.
    pub fn add_piece_with_message(&mut self, piece: ColoredPiece, label: &str) -> (bool, String) {
        match self.add_piece(piece, label) {
            Ok(square) => (true, placed_message(piece, square)),
            Err(e) => (false, e.to_string()),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.squares[square.as_index()]
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupied.contains(square)
    }

    /// All occupied squares
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Number of pieces on the board
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Pieces in square order, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.occupied
            .iter()
            .filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Pieces of one color in square order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }
}

/// Confirmation shown after a successful placement.
pub(crate) fn placed_message(piece: ColoredPiece, square: Square) -> String {
    format!("{piece} added at {square}.")
}
