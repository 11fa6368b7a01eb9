use once_cell::sync::Lazy;

use super::{Bitboard, Square};

/// Knight jumps as (file, rank) deltas.
pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        attacks[sq.as_index()] = KNIGHT_DELTAS
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .collect();
    }
    attacks
});

/// Full rank and file through each square, origin excluded. No blockers.
pub(crate) static ROOK_LINES: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        let lines = Bitboard::file_mask(sq.file()) | Bitboard::rank_mask(sq.rank());
        attacks[sq.as_index()] = lines.without(sq);
    }
    attacks
});
