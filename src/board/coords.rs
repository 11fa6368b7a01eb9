//! Label-level coordinate helpers.
//!
//! Labels are two characters, a file letter `a`-`h` then a rank digit
//! `1`-`8`. Coordinates are 1-indexed `(col, row)`, so `a1` is `(1, 1)`
//! and `h8` is `(8, 8)`.

use super::{Square, SquareError};
use super::types::{FILES, RANKS};

/// True iff `label` is exactly a file letter followed by a rank digit.
#[must_use]
pub fn is_valid_square(label: &str) -> bool {
    let b = label.as_bytes();
    b.len() == 2 && FILES.as_bytes().contains(&b[0]) && RANKS.as_bytes().contains(&b[1])
}

/// Convert a label to 1-indexed `(col, row)`.
pub fn to_coords(label: &str) -> Result<(usize, usize), SquareError> {
    label.parse::<Square>().map(Square::coords)
}

/// Convert 1-indexed `(col, row)` back to a label.
pub fn to_label(col: usize, row: usize) -> Result<String, SquareError> {
    Square::from_coords(col, row).map(|sq| sq.to_string())
}
