//! Pawn movement: the four legal displacement shapes.
//!
//! Unlike the other piece rules, the pawn rule takes the full `GameState`:
//! en passant legality depends on the immediately preceding ply.

use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_table::{PieceColor, PieceKind};
use crate::rules::general_rules::general_rules;

/// The rank a pawn of this color must stand on to capture en passant, and
/// the origin/destination rows of the enemy double step it answers.
const fn en_passant_geometry(color: PieceColor) -> (u8, u8, u8) {
    match color {
        // White pawn on its fifth rank; black just played row 6 -> row 4.
        PieceColor::White => (4, 6, 4),
        // Black pawn on its fifth rank; white just played row 1 -> row 3.
        PieceColor::Black => (3, 1, 3),
    }
}

pub fn pawn_rules(game_state: &GameState, chess_move: &Move) -> bool {
    let board = &game_state.board;
    if !general_rules(board, chess_move) {
        return false;
    }

    let Some(moving) = board.piece_at(chess_move.from_row, chess_move.from_col) else {
        return false;
    };
    if moving.kind != PieceKind::Pawn {
        return false;
    }

    let forward = moving.color.forward();
    let start_row = match moving.color {
        PieceColor::White => 1,
        PieceColor::Black => 6,
    };
    let (d_row, d_col) = chess_move.vector();
    let destination_occupied = board.piece_at(chess_move.to_row, chess_move.to_col).is_some();

    // One square forward onto an empty square.
    if (d_row, d_col) == (forward, 0) {
        return !destination_occupied;
    }

    // Two squares forward from the starting rank, path and destination empty.
    if (d_row, d_col) == (2 * forward, 0) && chess_move.from_row == start_row {
        let intermediate = (chess_move.from_row as i8 + forward) as u8;
        return board.is_empty(intermediate, chess_move.from_col) && !destination_occupied;
    }

    // Diagonal forward: an ordinary capture, or en passant onto an empty
    // square. Any other diagonal onto an empty square is illegal.
    if d_row == forward && (d_col == 1 || d_col == -1) {
        if destination_occupied {
            // The gate already rejected same-color targets.
            return true;
        }
        return is_en_passant(game_state, chess_move, moving.color);
    }

    false
}

/// The immediately preceding ply must have been a two-square advance by an
/// enemy pawn landing adjacent to the mover, on the same file as the
/// destination column.
fn is_en_passant(game_state: &GameState, chess_move: &Move, color: PieceColor) -> bool {
    let (capture_rank, enemy_from_row, enemy_to_row) = en_passant_geometry(color);
    if chess_move.from_row != capture_rank {
        return false;
    }
    let enemy_pawn = match color {
        PieceColor::White => 'C',
        PieceColor::Black => '6',
    };
    let (Some(last_piece), Some(last_move)) =
        (game_state.last_piece_moved, game_state.last_move)
    else {
        return false;
    };
    last_piece == enemy_pawn
        && last_move.from_row == enemy_from_row
        && last_move.from_col == chess_move.to_col
        && last_move.to_row == enemy_to_row
}
