//! State transition: apply a validated move and classify the result.

use crate::chess_errors::ChessErrors;
use crate::chess_move::Move;
use crate::game_state::{GameState, Status};
use crate::piece_table::{PieceColor, PieceKind, TileCode};
use crate::rules::inspect_check::{is_check, is_checkmate};
use crate::rules::validate_move::is_valid_move;

/// Everything the persistence collaborator stores after a move: the new
/// snapshot, the status the opponent now faces, and what was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub game_state: GameState,
    pub status: Status,
    pub captured: Option<TileCode>,
}

/// Apply a move that has already passed `is_valid_move`. Behavior on an
/// illegal move is undefined; callers that cannot guarantee prior
/// validation use [`try_apply_move`].
pub fn apply_move(game_state: &GameState, chess_move: &Move) -> MoveOutcome {
    let board = &game_state.board;
    let moving = board.tile(chess_move.from_row, chess_move.from_col);
    let mover_color = board
        .piece_at(chess_move.from_row, chess_move.from_col)
        .map(|piece| piece.color)
        .unwrap_or(PieceColor::White);

    // Capture outcome: the destination occupant, or the en passant victim
    // removed from (from_row, to_col) rather than the destination.
    let captured = if !board.is_empty(chess_move.to_row, chess_move.to_col) {
        Some(board.tile(chess_move.to_row, chess_move.to_col))
    } else if is_en_passant_shape(game_state, chess_move) {
        Some(board.tile(chess_move.from_row, chess_move.to_col))
    } else {
        None
    };

    // The board transform (relocation, en passant removal, castling rook)
    // is shared with the self-check veto's scratch application.
    let new_board = board.preview_move(chess_move);

    let origin = (chess_move.from_row, chess_move.from_col);
    let new_state = GameState {
        board: new_board,
        side_to_move: mover_color.opposite(),
        last_piece_moved: Some(moving),
        last_move: Some(*chess_move),
        // Rights are revoked the first time a tracked origin square is
        // vacated, and never restored.
        white_king_moved: game_state.white_king_moved || origin == (0, 3),
        white_rook_0_moved: game_state.white_rook_0_moved || origin == (0, 0),
        white_rook_7_moved: game_state.white_rook_7_moved || origin == (0, 7),
        black_king_moved: game_state.black_king_moved || origin == (7, 3),
        black_rook_0_moved: game_state.black_rook_0_moved || origin == (7, 0),
        black_rook_7_moved: game_state.black_rook_7_moved || origin == (7, 7),
    };

    let opponent = mover_color.opposite();
    let status = if is_checkmate(&new_state, opponent) {
        Status::Checkmate
    } else if is_check(&new_state.board, opponent) {
        Status::Check
    } else {
        Status::Active
    };

    MoveOutcome { game_state: new_state, status, captured }
}

/// Validate-then-apply for callers without a prior `is_valid_move` call.
pub fn try_apply_move(
    game_state: &GameState,
    chess_move: &Move,
) -> Result<MoveOutcome, ChessErrors> {
    if !is_valid_move(game_state, chess_move) {
        return Err(ChessErrors::IllegalMove);
    }
    Ok(apply_move(game_state, chess_move))
}

/// A pawn displaced diagonally onto an empty square from its en passant
/// rank. Only called on validated moves, where this shape implies a real
/// en passant capture.
fn is_en_passant_shape(game_state: &GameState, chess_move: &Move) -> bool {
    let Some(piece) = game_state.board.piece_at(chess_move.from_row, chess_move.from_col) else {
        return false;
    };
    let en_passant_rank = match piece.color {
        PieceColor::White => 4,
        PieceColor::Black => 3,
    };
    piece.kind == PieceKind::Pawn
        && chess_move.from_col != chess_move.to_col
        && chess_move.from_row == en_passant_rank
        && game_state.board.is_empty(chess_move.to_row, chess_move.to_col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn board_with(tiles: &[(usize, usize, char)]) -> Board {
        let mut board = Board::from_tile_string(&"0".repeat(64)).unwrap();
        for &(row, col, code) in tiles {
            board.tiles[row][col] = code;
        }
        board
    }

    #[test]
    fn quiet_move_produces_active_status() {
        let state = GameState::new_game();
        let chess_move = Move::new(1, 4, 3, 4);
        assert!(is_valid_move(&state, &chess_move));
        let outcome = apply_move(&state, &chess_move);
        assert_eq!(outcome.status, Status::Active);
        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.game_state.side_to_move, PieceColor::Black);
        assert_eq!(outcome.game_state.last_piece_moved, Some('6'));
        assert_eq!(outcome.game_state.last_move, Some(chess_move));
    }

    #[test]
    fn ordinary_capture_reports_the_victim() {
        let board = board_with(&[(0, 0, '1'), (3, 3, '5'), (3, 6, 'C'), (7, 7, '7')]);
        let state = GameState::from_board(board, PieceColor::White);
        let outcome = try_apply_move(&state, &Move::new(3, 3, 3, 6)).unwrap();
        assert_eq!(outcome.captured, Some('C'));
        assert_eq!(outcome.game_state.board.tile(3, 6), '5');
    }

    /// Spec scenario: white pawn on (4,3), black just double-stepped to
    /// (4,4); the capture lands on (5,4) and the victim leaves (4,4).
    #[test]
    fn en_passant_removes_the_pawn_beside_the_origin() {
        let board = board_with(&[(0, 0, '1'), (4, 3, '6'), (4, 4, 'C'), (7, 7, '7')]);
        let mut state = GameState::from_board(board, PieceColor::White);
        state.last_piece_moved = Some('C');
        state.last_move = Some(Move::new(6, 4, 4, 4));

        let outcome = try_apply_move(&state, &Move::new(4, 3, 5, 4)).unwrap();
        assert_eq!(outcome.captured, Some('C'));
        assert_eq!(outcome.game_state.board.tile(5, 4), '6');
        assert!(outcome.game_state.board.is_empty(4, 4));
        assert!(outcome.game_state.board.is_empty(4, 3));
    }

    #[test]
    fn castling_relocates_both_king_and_rook() {
        let board = board_with(&[
            (0, 0, '5'),
            (0, 3, '1'),
            (0, 7, '5'),
            (7, 3, '7'),
        ]);
        let state = GameState::from_board(board, PieceColor::White);
        let outcome = try_apply_move(&state, &Move::new(0, 3, 0, 5)).unwrap();
        let after = &outcome.game_state.board;
        assert_eq!(after.tile(0, 5), '1');
        assert_eq!(after.tile(0, 4), '5');
        assert!(after.is_empty(0, 3));
        assert!(after.is_empty(0, 7));
        assert_eq!(outcome.captured, None);
        // Vacating (0,3) burns the king's rights for good.
        assert!(outcome.game_state.white_king_moved);
    }

    #[test]
    fn rook_departure_burns_only_its_own_flag() {
        let state = GameState::new_game();
        // Knight out, so nothing tracked moves yet.
        let outcome = apply_move(&state, &Move::new(0, 1, 2, 2));
        assert!(!outcome.game_state.white_rook_0_moved);
        // Rook origins are tracked even if another piece vacates them later.
        let board = board_with(&[(0, 0, '5'), (0, 3, '1'), (7, 3, '7')]);
        let state = GameState::from_board(board, PieceColor::White);
        let outcome = try_apply_move(&state, &Move::new(0, 0, 3, 0)).unwrap();
        assert!(outcome.game_state.white_rook_0_moved);
        assert!(!outcome.game_state.white_rook_7_moved);
        assert!(!outcome.game_state.white_king_moved);
    }

    #[test]
    fn check_and_checkmate_are_classified_for_the_opponent() {
        // Rook slides to the back rank: mate against the boxed-in king.
        let board = board_with(&[
            (0, 0, '1'),
            (1, 0, '6'),
            (1, 1, '6'),
            (4, 7, 'B'),
            (7, 7, '7'),
        ]);
        let state = GameState::from_board(board, PieceColor::Black);
        let outcome = try_apply_move(&state, &Move::new(4, 7, 0, 7)).unwrap();
        assert_eq!(outcome.status, Status::Checkmate);

        // Without the boxing pawns it is merely check.
        let board = board_with(&[(0, 0, '1'), (4, 7, 'B'), (7, 7, '7')]);
        let state = GameState::from_board(board, PieceColor::Black);
        let outcome = try_apply_move(&state, &Move::new(4, 7, 0, 7)).unwrap();
        assert_eq!(outcome.status, Status::Check);
    }

    #[test]
    fn illegal_moves_are_refused_by_the_checked_entry() {
        let state = GameState::new_game();
        assert_eq!(
            try_apply_move(&state, &Move::new(3, 3, 4, 3)),
            Err(ChessErrors::IllegalMove)
        );
        assert_eq!(
            try_apply_move(&state, &Move::new(0, 0, 3, 0)),
            Err(ChessErrors::IllegalMove)
        );
    }
}
