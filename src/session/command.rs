use std::fmt;

use crate::board::{Piece, PieceParseError, Square, SquareError};

/// One parsed line of placement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementInput {
    Place { piece: Piece, square: Square },
    Done,
}

/// Error type for placement line parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Line did not have exactly a piece and a square
    WrongArity { found: usize },
    InvalidPiece(PieceParseError),
    InvalidSquare(SquareError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongArity { .. } => {
                write!(f, "Input must contain two parts: piece and position.")
            }
            InputError::InvalidPiece(_) => {
                let names: Vec<&str> = Piece::ALL.iter().map(|p| p.name()).collect();
                write!(f, "Invalid piece. Please choose from: {}", names.join(", "))
            }
            InputError::InvalidSquare(_) => {
                write!(f, "Invalid position. Please use format 'a1' to 'h8'.")
            }
        }
    }
}

impl std::error::Error for InputError {}

impl From<PieceParseError> for InputError {
    fn from(e: PieceParseError) -> Self {
        InputError::InvalidPiece(e)
    }
}

impl From<SquareError> for InputError {
    fn from(e: SquareError) -> Self {
        InputError::InvalidSquare(e)
    }
}

/// Parse a placement line such as `"rook a1"`.
///
/// Case and surrounding whitespace are ignored. A lone `done` is accepted
/// only when `allow_done` is set; otherwise it counts as a one-word line.
pub fn parse_placement(line: &str, allow_done: bool) -> Result<PlacementInput, InputError> {
    let lowered = line.trim().to_lowercase();
    let parts: Vec<&str> = lowered.split_whitespace().collect();

    match parts.as_slice() {
        ["done"] if allow_done => Ok(PlacementInput::Done),
        [kind, label] => {
            let piece = kind.parse::<Piece>()?;
            let square = label.parse::<Square>()?;
            Ok(PlacementInput::Place { piece, square })
        }
        _ => Err(InputError::WrongArity { found: parts.len() }),
    }
}
