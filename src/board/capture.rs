//! Capture evaluation.
//!
//! A capture is only a membership test against the mover's reachable set.
//! Occupancy, color and pieces standing in between are never consulted.

use log::trace;

use super::movegen::generate_moves;
use super::{Piece, Square};

/// True iff `mover` standing on `from` reaches `to`.
#[must_use]
pub fn can_capture(mover: Piece, from: Square, to: Square) -> bool {
    let hit = generate_moves(mover, from).contains(to);
    trace!("{mover} {from} -> {to}: {hit}");
    hit
}

/// Label-level capture check.
///
/// `_target_kind` is accepted so call sites can pass the defending piece,
/// but it has no effect. Invalid labels or an unknown mover kind answer
/// `false`.
#[must_use]
pub fn can_capture_str(
    mover_kind: &str,
    mover_label: &str,
    _target_kind: &str,
    target_label: &str,
) -> bool {
    let (Ok(mover), Ok(from), Ok(to)) = (
        mover_kind.parse::<Piece>(),
        mover_label.parse::<Square>(),
        target_label.parse::<Square>(),
    ) else {
        return false;
    };
    can_capture(mover, from, to)
}
