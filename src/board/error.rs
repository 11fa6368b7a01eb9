//! Error types for board operations.

use std::fmt;

use super::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds
    RankOutOfBounds { rank: usize },
    /// File out of bounds
    FileOutOfBounds { file: usize },
    /// Label is not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece name parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    /// Kind is not one of rook, knight
    InvalidKind { kind: String },
    /// Color is not one of white, black
    InvalidColor { color: String },
    /// Identifier is not of the form `color_kind`
    InvalidFormat { found: String },
}

impl fmt::Display for PieceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceParseError::InvalidKind { kind } => {
                write!(f, "Invalid piece '{kind}', expected rook or knight")
            }
            PieceParseError::InvalidColor { color } => {
                write!(f, "Invalid color '{color}', expected white or black")
            }
            PieceParseError::InvalidFormat { found } => {
                write!(f, "Invalid piece identifier '{found}', expected color_kind")
            }
        }
    }
}

impl std::error::Error for PieceParseError {}

/// Error type for rejected piece placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The label does not name a square
    InvalidSquare(SquareError),
    /// The square already holds a piece
    SquareOccupied { square: Square },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidSquare(_) => {
                write!(f, "Invalid position. Please use format 'a1' to 'h8'.")
            }
            PlacementError::SquareOccupied { square } => {
                write!(f, "Position {square} is already occupied.")
            }
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::InvalidSquare(e) => Some(e),
            PlacementError::SquareOccupied { .. } => None,
        }
    }
}

impl From<SquareError> for PlacementError {
    fn from(e: SquareError) -> Self {
        PlacementError::InvalidSquare(e)
    }
}
