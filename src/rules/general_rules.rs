//! The general legality gate every piece rule presupposes.

use crate::board::Board;
use crate::chess_move::Move;

/// Reject when either endpoint is off the board, the origin is empty, or
/// the destination holds a piece of the mover's own color. The check
/// detector's reverse-attack scan also funnels through here: it only ever
/// queries opposing pieces against the king square, so the own-color test
/// never short-circuits that scan the wrong way.
pub fn general_rules(board: &Board, chess_move: &Move) -> bool {
    if chess_move.from_row >= 8
        || chess_move.from_col >= 8
        || chess_move.to_row >= 8
        || chess_move.to_col >= 8
    {
        return false;
    }

    let Some(moving) = board.piece_at(chess_move.from_row, chess_move.from_col) else {
        return false;
    };

    // You cannot capture your own piece.
    if let Some(target) = board.piece_at(chess_move.to_row, chess_move.to_col) {
        if target.color == moving.color {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_endpoints_are_rejected() {
        let board = Board::opening_position();
        assert!(!general_rules(&board, &Move::new(8, 0, 0, 0)));
        assert!(!general_rules(&board, &Move::new(0, 0, 0, 8)));
        assert!(!general_rules(&board, &Move::new(255, 255, 1, 1)));
    }

    #[test]
    fn empty_origin_is_rejected() {
        let board = Board::opening_position();
        assert!(!general_rules(&board, &Move::new(3, 3, 4, 3)));
    }

    #[test]
    fn own_color_destination_is_rejected() {
        let board = Board::opening_position();
        // White rook onto white pawn.
        assert!(!general_rules(&board, &Move::new(0, 0, 1, 0)));
        // White pawn onto empty square passes the gate.
        assert!(general_rules(&board, &Move::new(1, 0, 2, 0)));
        // Enemy destination passes the gate.
        assert!(general_rules(&board, &Move::new(0, 0, 6, 0)));
    }
}
