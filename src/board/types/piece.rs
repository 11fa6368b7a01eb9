//! Piece and color types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceParseError;

/// Piece kinds understood by the move generator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Piece {
    Rook,
    Knight,
}

impl Piece {
    /// All piece kinds in index order
    pub const ALL: [Piece; 2] = [Piece::Rook, Piece::Knight];

    /// Lowercase name used in prompts and piece identifiers ("rook", "knight").
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Piece::Rook => "rook",
            Piece::Knight => "knight",
        }
    }

    /// Convert piece to its board letter (R, N)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Rook => 'R',
            Piece::Knight => 'N',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rook" => Ok(Piece::Rook),
            "knight" => Ok(Piece::Knight),
            _ => Err(PieceParseError::InvalidKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Piece colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(PieceParseError::InvalidColor {
                color: s.to_string(),
            }),
        }
    }
}

/// A piece as it sits on the board: a color and a kind, nothing else.
///
/// Displays and parses as `color_kind`, e.g. `white_rook` or `black_knight`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColoredPiece {
    pub color: Color,
    pub piece: Piece,
}

impl ColoredPiece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        ColoredPiece { color, piece }
    }

    #[inline]
    #[must_use]
    pub const fn white(piece: Piece) -> Self {
        Self::new(Color::White, piece)
    }

    #[inline]
    #[must_use]
    pub const fn black(piece: Piece) -> Self {
        Self::new(Color::Black, piece)
    }

    /// Two-character board symbol: `WR`, `WN`, `BR`, `BN`.
    #[must_use]
    pub fn symbol(self) -> String {
        let c = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        format!("{c}{}", self.piece.to_char())
    }
}

impl fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.color, self.piece)
    }
}

impl FromStr for ColoredPiece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (color, piece) = s.split_once('_').ok_or_else(|| PieceParseError::InvalidFormat {
            found: s.to_string(),
        })?;
        Ok(ColoredPiece::new(color.parse()?, piece.parse()?))
    }
}
