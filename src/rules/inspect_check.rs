//! Check and checkmate detection.
//!
//! `is_check` runs the attack predicates in reverse: for every opposing
//! piece, can it reach the king's square. Pawns and kings use hardcoded
//! adjacency tests instead of their full rules — a king's rule would
//! recurse through castling, and a pawn attacks diagonally regardless of
//! occupancy. `is_checkmate` is deliberately brute force: at most 4096
//! candidate moves re-validated through the full legality pipeline, bounded
//! and allocation-light, which is plenty for turn-paced play.

use crate::board::Board;
use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_table::{PieceColor, PieceKind};
use crate::rules::knight_rules::knight_rules;
use crate::rules::sliding_rules::sliding_rules;
use crate::rules::validate_move::is_valid_move;

/// Whether `color`'s king is currently attacked. Pure: safe to call on
/// scratch boards any number of times. A board with no such king (never
/// produced by play) reports no check.
pub fn is_check(board: &Board, color: PieceColor) -> bool {
    let Some((king_row, king_col)) = board.find_king(color) else {
        return false;
    };
    let opponent = color.opposite();

    for row in 0..8u8 {
        for col in 0..8u8 {
            if (row, col) == (king_row, king_col) {
                continue;
            }
            let Some(piece) = board.piece_at(row, col) else {
                continue;
            };
            if piece.color != opponent {
                continue;
            }
            let to_king = Move::new(row, col, king_row, king_col);
            let attacks = match piece.kind {
                // Adjacency only; kings never capture kings in play, but
                // the checkmate search needs opposing-king pressure to
                // rule out escape squares.
                PieceKind::King => {
                    (row as i8 - king_row as i8).abs() <= 1
                        && (col as i8 - king_col as i8).abs() <= 1
                }
                PieceKind::Knight => knight_rules(board, &to_king),
                // Diagonal-only, one rank forward, regardless of what
                // occupies the square.
                PieceKind::Pawn => {
                    king_row as i8 == row as i8 + piece.color.forward()
                        && (king_col as i8 - col as i8).abs() == 1
                }
                kind => sliding_rules(board, &to_king, kind),
            };
            if attacks {
                return true;
            }
        }
    }

    false
}

/// Exhaustive mate test: checkmate iff in check and no legal move for any
/// of `color`'s pieces escapes it. Every accepted move already passed the
/// self-check veto inside `is_valid_move`, so its scratch position is
/// check-free by construction and finding one settles the question.
pub fn is_checkmate(game_state: &GameState, color: PieceColor) -> bool {
    if !is_check(&game_state.board, color) {
        return false;
    }

    for from_row in 0..8u8 {
        for from_col in 0..8u8 {
            match game_state.board.piece_at(from_row, from_col) {
                Some(piece) if piece.color == color => {}
                _ => continue,
            }
            for to_row in 0..8u8 {
                for to_col in 0..8u8 {
                    let escape = Move::new(from_row, from_col, to_row, to_col);
                    if is_valid_move(game_state, &escape) {
                        return false;
                    }
                }
            }
        }
    }

    true
}
