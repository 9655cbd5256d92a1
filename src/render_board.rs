//! Terminal-oriented Unicode board renderer.
//!
//! Produces a human-readable view of a board for debugging, tests, and the
//! demo binary. Rank 8 is printed first; row 0 of the array is rank 1.

use crate::board::Board;
use crate::piece_table::tile_glyph;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for col in 0..8 {
            let code = board.tiles[row][col];
            if code == '0' {
                out.push('\u{00b7}');
            } else {
                out.push(tile_glyph(code));
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
