//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// File letters in board order.
pub(crate) const FILES: &str = "abcdefgh";
/// Rank digits in board order.
pub(crate) const RANKS: &str = "12345678";

/// A square on the board, represented as (rank, file), both 0-7.
///
/// Serialized as `[rank, file]`; deserializing goes through the bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(usize, usize)"))]
pub struct Square(pub(crate) usize, pub(crate) usize); // (rank, file)

impl Square {
    /// Every square, a1 first and h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }

    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Create a square from 1-indexed (column, row), e.g. (1, 1) = a1, (8, 8) = h8.
    pub fn from_coords(col: usize, row: usize) -> Result<Self, SquareError> {
        if !(1..=8).contains(&col) {
            return Err(SquareError::FileOutOfBounds { file: col });
        }
        if !(1..=8).contains(&row) {
            return Err(SquareError::RankOutOfBounds { rank: row });
        }
        Ok(Square(row - 1, col - 1))
    }

    /// 1-indexed (column, row) pair for this square.
    #[inline]
    #[must_use]
    pub const fn coords(self) -> (usize, usize) {
        (self.1 + 1, self.0 + 1)
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Offset by (file, rank) deltas, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, df: isize, dr: isize) -> Option<Self> {
        let file = self.1.checked_add_signed(df)?;
        let rank = self.0.checked_add_signed(dr)?;
        Square::new(rank, file)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index. Callers guarantee `idx < 64`.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // a1=0, b1=1, ..., h8=63
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = FILES.find(f).ok_or_else(invalid)?;
        let rank = RANKS.find(r).ok_or_else(invalid)?;

        Ok(Square(rank, file))
    }
}
