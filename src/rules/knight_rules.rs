//! Knight movement: the 8 canonical offsets, no obstruction check.

use crate::board::Board;
use crate::chess_move::Move;
use crate::rules::general_rules::general_rules;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Knights jump, so legality depends only on the displacement vector.
pub fn knight_rules(board: &Board, chess_move: &Move) -> bool {
    if !general_rules(board, chess_move) {
        return false;
    }
    KNIGHT_OFFSETS.contains(&chess_move.vector())
}
