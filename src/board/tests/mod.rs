//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `coords.rs` - Label validation and coordinate mapping
//! - `movegen.rs` - Rook and knight reachable sets
//! - `placement.rs` - Board growth and occupancy rules
//! - `capture.rs` - Capture evaluation
//! - `proptest.rs` - Property-based tests
//! - `serialization.rs` - Serde formats (with the `serde` feature)

mod placement;
mod proptest;

use crate::board::Square;

/// Parse a label that the test knows to be valid.
pub(super) fn sq(label: &str) -> Square {
    label.parse().expect("test square")
}
