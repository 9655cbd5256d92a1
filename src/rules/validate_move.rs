//! The top-level legality pipeline.
//!
//! General gate, then the self-check veto, then the piece-specific shape
//! rule. The veto is applied here exactly once and governs every piece
//! kind uniformly — including castling and en passant, so a pin exposed by
//! an en passant capture blocks it.

use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_table::PieceKind;
use crate::rules::general_rules::general_rules;
use crate::rules::inspect_check::is_check;
use crate::rules::king_rules::{castling_rules, king_rules};
use crate::rules::knight_rules::knight_rules;
use crate::rules::pawn_rules::pawn_rules;
use crate::rules::sliding_rules::sliding_rules;

/// Whether the proposed move is legal in this position. `false` is the
/// engine's only negative signal; it never panics on malformed input.
pub fn is_valid_move(game_state: &GameState, chess_move: &Move) -> bool {
    let board = &game_state.board;
    if !general_rules(board, chess_move) {
        return false;
    }

    // The gate guarantees an occupied origin.
    let Some(moving) = board.piece_at(chess_move.from_row, chess_move.from_col) else {
        return false;
    };

    // Self-check veto: try the move on a scratch board and reject anything
    // that leaves the mover's own king attacked, however natural the piece
    // motion was.
    if is_check(&board.preview_move(chess_move), moving.color) {
        return false;
    }

    match moving.kind {
        PieceKind::King => {
            if chess_move.is_castling_shape() {
                castling_rules(game_state, chess_move)
            } else {
                king_rules(game_state, chess_move)
            }
        }
        PieceKind::Knight => knight_rules(board, chess_move),
        PieceKind::Pawn => pawn_rules(game_state, chess_move),
        kind => sliding_rules(board, chess_move, kind),
    }
}
