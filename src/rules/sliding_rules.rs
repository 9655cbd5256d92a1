//! Sliding-piece movement: queen, rook, and bishop.
//!
//! The move must be purely orthogonal (rook), purely diagonal (bishop), or
//! either (queen); every square strictly between origin and destination
//! must be empty.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_table::PieceKind;
use crate::rules::general_rules::general_rules;

pub fn sliding_rules(board: &Board, chess_move: &Move, kind: PieceKind) -> bool {
    if !general_rules(board, chess_move) {
        return false;
    }

    let (d_row, d_col) = chess_move.vector();
    let is_straight = d_row == 0 || d_col == 0;
    let is_diagonal = d_row == d_col || d_row == -d_col;
    // A zero vector is both "straight" and "diagonal" by these tests, but
    // it also means origin == destination, which the gate rejected already
    // (the origin piece is its own same-color obstruction).

    match kind {
        PieceKind::Queen => {
            if !(is_straight || is_diagonal) {
                return false;
            }
        }
        PieceKind::Rook => {
            if !is_straight {
                return false;
            }
        }
        PieceKind::Bishop => {
            if !is_diagonal {
                return false;
            }
        }
        _ => return false,
    }

    // Single-step slides have no intermediate squares to obstruct.
    let steps = d_row.abs().max(d_col.abs());
    if steps < 2 {
        return true;
    }

    let unit_row = d_row.signum();
    let unit_col = d_col.signum();
    for i in 1..steps {
        let row = (chess_move.from_row as i8 + unit_row * i) as u8;
        let col = (chess_move.from_col as i8 + unit_col * i) as u8;
        if !board.is_empty(row, col) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_board() -> Board {
        let mut board = Board::from_tile_string(&"0".repeat(64)).unwrap();
        board.tiles[0][0] = '1';
        board.tiles[7][7] = '7';
        board
    }

    #[test]
    fn direction_legality_per_kind() {
        let mut board = sparse_board();
        board.tiles[3][3] = '2'; // treat the square as each kind in turn
        let straight = Move::new(3, 3, 3, 7);
        let diagonal = Move::new(3, 3, 6, 6);
        let crooked = Move::new(3, 3, 5, 4);
        assert!(sliding_rules(&board, &straight, PieceKind::Queen));
        assert!(sliding_rules(&board, &diagonal, PieceKind::Queen));
        assert!(!sliding_rules(&board, &crooked, PieceKind::Queen));
        assert!(sliding_rules(&board, &straight, PieceKind::Rook));
        assert!(!sliding_rules(&board, &diagonal, PieceKind::Rook));
        assert!(!sliding_rules(&board, &straight, PieceKind::Bishop));
        assert!(sliding_rules(&board, &diagonal, PieceKind::Bishop));
    }

    #[test]
    fn any_obstruction_blocks_the_line() {
        let mut board = sparse_board();
        board.tiles[3][0] = '5';
        board.tiles[3][4] = 'C';
        // Clear until the black pawn: capturing it is fine.
        assert!(sliding_rules(&board, &Move::new(3, 0, 3, 4), PieceKind::Rook));
        // Beyond it is blocked.
        assert!(!sliding_rules(&board, &Move::new(3, 0, 3, 6), PieceKind::Rook));
        // Single-step needs no obstruction scan.
        assert!(sliding_rules(&board, &Move::new(3, 0, 3, 1), PieceKind::Rook));
    }

    #[test]
    fn rooks_cannot_slide_in_the_opening() {
        let board = Board::opening_position();
        assert!(!sliding_rules(&board, &Move::new(0, 0, 3, 0), PieceKind::Rook));
        assert!(!sliding_rules(&board, &Move::new(0, 4, 2, 2), PieceKind::Queen));
    }
}
