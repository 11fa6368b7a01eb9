use crate::board::{Bitboard, Board, Square};

const TOP: &str = "  ┌───┬───┬───┬───┬───┬───┬───┬───┐";
const MIDDLE: &str = "  ├───┼───┼───┼───┼───┼───┼───┼───┤";
const BOTTOM: &str = "  └───┴───┴───┴───┴───┴───┴───┴───┘";
const FILE_LABELS: &str = "    a   b   c   d   e   f   g   h  ";

/// Draw the board with rank 8 on top.
///
/// Occupied squares show the piece symbol; empty squares in `highlights`
/// show a dot.
#[must_use]
pub fn render_board(board: &Board, highlights: Bitboard) -> String {
    let mut out = String::new();
    out.push_str(TOP);
    out.push('\n');
    for rank in (0..8).rev() {
        out.push_str(&format!("{} │", rank + 1));
        for file in 0..8 {
            let sq = Square(rank, file);
            let cell = match board.piece_at(sq) {
                Some(p) => p.symbol(),
                None if highlights.contains(sq) => "· ".to_string(),
                None => "  ".to_string(),
            };
            out.push_str(&format!(" {cell}│"));
        }
        out.push('\n');
        if rank > 0 {
            out.push_str(MIDDLE);
            out.push('\n');
        }
    }
    out.push_str(BOTTOM);
    out.push('\n');
    out.push_str(FILE_LABELS);
    out.push('\n');
    out
}
