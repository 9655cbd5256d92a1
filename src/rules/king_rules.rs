//! King movement, including castling.
//!
//! A plain king move is any of the 8 unit-step vectors. Castling is the
//! only way a king moves two squares and is represented as one of the four
//! king moves along the back rank; it drags the paired rook with it during
//! application.

use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_table::PieceColor;
use crate::rules::general_rules::general_rules;
use crate::rules::inspect_check::is_check;

/// Plain (non-castling) king movement: one step in any direction. The
/// self-check veto in `validate_move` keeps the king out of attacked
/// squares.
pub fn king_rules(game_state: &GameState, chess_move: &Move) -> bool {
    if !general_rules(&game_state.board, chess_move) {
        return false;
    }
    let (d_row, d_col) = chess_move.vector();
    (-1..=1).contains(&d_row) && (-1..=1).contains(&d_col) && (d_row, d_col) != (0, 0)
}

/// Castling legality. The move must be one of the four two-square king
/// moves; the back-rank segment must hold the untouched king and rook
/// codes with empty squares between; neither piece may ever have vacated
/// its origin square; and the king may not castle out of, through, or into
/// check (the landing square is re-vetoed by `validate_move`, but the rule
/// is enforced here in full so it stands on its own).
pub fn castling_rules(game_state: &GameState, chess_move: &Move) -> bool {
    if !chess_move.is_castling_shape() {
        return false;
    }
    let board = &game_state.board;
    let row = chess_move.from_row;
    let (color, king_code, rook_code) = if row == 0 {
        (PieceColor::White, '1', '5')
    } else {
        (PieceColor::Black, '7', 'B')
    };

    // The relevant king/rook pair must never have moved.
    let rights_intact = match (row, chess_move.to_col) {
        (0, 1) => !game_state.white_king_moved && !game_state.white_rook_0_moved,
        (0, 5) => !game_state.white_king_moved && !game_state.white_rook_7_moved,
        (7, 1) => !game_state.black_king_moved && !game_state.black_rook_0_moved,
        _ => !game_state.black_king_moved && !game_state.black_rook_7_moved,
    };
    if !rights_intact {
        return false;
    }

    // The rank segment must look exactly as it did at the start of the game.
    let segment_ok = if chess_move.to_col == 1 {
        board.tile(row, 0) == rook_code
            && board.is_empty(row, 1)
            && board.is_empty(row, 2)
            && board.tile(row, 3) == king_code
    } else {
        board.tile(row, 3) == king_code
            && board.is_empty(row, 4)
            && board.is_empty(row, 5)
            && board.is_empty(row, 6)
            && board.tile(row, 7) == rook_code
    };
    if !segment_ok {
        return false;
    }

    // Not out of, through, or into check. Each square the king touches is
    // tried on a scratch board.
    if is_check(board, color) {
        return false;
    }
    let crossed: &[u8] = if chess_move.to_col == 1 { &[2, 1] } else { &[4, 5] };
    for &col in crossed {
        let step = Move::new(row, 3, row, col);
        if is_check(&board.preview_move(&step), color) {
            return false;
        }
    }

    true
}
