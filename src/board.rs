//! The 8×8 board of tile codes.
//!
//! Row 0 is rank 1 (white's back rank), row 7 is rank 8; column 0..7 is
//! file a..h. Boards are plain `Copy` arrays so scratch copies for the
//! self-check veto and the checkmate search cost no allocation.

use crate::chess_errors::ChessErrors;
use crate::chess_move::Move;
use crate::piece_table::{
    decode_tile, is_tile_code, Piece, PieceColor, PieceKind, TileCode, EMPTY_TILE,
};

/// The opening position, persisted form (row 0 first, row-major).
pub const OPENING_POSITION: &str = "54312345\
                                    66666666\
                                    00000000\
                                    00000000\
                                    00000000\
                                    00000000\
                                    CCCCCCCC\
                                    BA9789AB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub tiles: [[TileCode; 8]; 8],
}

impl Board {
    pub fn opening_position() -> Self {
        Board::from_tile_string(OPENING_POSITION).expect("opening position literal should parse")
    }

    /// Parse the persisted 64-character row-major form.
    pub fn from_tile_string(tiles: &str) -> Result<Self, ChessErrors> {
        let chars: Vec<char> = tiles.chars().collect();
        if chars.len() != 64 {
            return Err(ChessErrors::InvalidTileStringLength(chars.len()));
        }
        let mut board = Board { tiles: [[EMPTY_TILE; 8]; 8] };
        for (index, code) in chars.into_iter().enumerate() {
            if !is_tile_code(code) {
                return Err(ChessErrors::InvalidTileCode(code));
            }
            board.tiles[index / 8][index % 8] = code;
        }
        Ok(board)
    }

    /// Serialize back to the persisted 64-character form, bit-exact.
    pub fn to_tile_string(&self) -> String {
        self.tiles.iter().flatten().collect()
    }

    #[inline]
    pub fn tile(&self, row: u8, col: u8) -> TileCode {
        self.tiles[row as usize][col as usize]
    }

    #[inline]
    pub fn piece_at(&self, row: u8, col: u8) -> Option<Piece> {
        decode_tile(self.tile(row, col))
    }

    #[inline]
    pub fn is_empty(&self, row: u8, col: u8) -> bool {
        self.tile(row, col) == EMPTY_TILE
    }

    /// Locate the king of the given color.
    pub fn find_king(&self, color: PieceColor) -> Option<(u8, u8)> {
        let king_code = match color {
            PieceColor::White => '1',
            PieceColor::Black => '7',
        };
        for row in 0..8u8 {
            for col in 0..8u8 {
                if self.tile(row, col) == king_code {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Scratch application of a move: relocate the piece, clear the origin,
    /// and carry the two side effects that change king safety — the en
    /// passant victim's removal and the castling rook's relocation. The
    /// self-check veto and the checkmate search judge the resulting board;
    /// `apply_move_to_game` reuses it for the real transition.
    ///
    /// Coordinates must already be in range (the general gate runs first).
    pub fn preview_move(&self, chess_move: &Move) -> Board {
        let mut next = *self;
        let moving = next.tiles[chess_move.from_row as usize][chess_move.from_col as usize];

        if let Some(piece) = decode_tile(moving) {
            // A pawn landing diagonally on an empty square from its own
            // fifth rank is an en passant capture: the victim sits beside
            // the origin, not on the destination.
            let en_passant_rank = match piece.color {
                PieceColor::White => 4,
                PieceColor::Black => 3,
            };
            if piece.kind == PieceKind::Pawn
                && chess_move.from_col != chess_move.to_col
                && next.is_empty(chess_move.to_row, chess_move.to_col)
                && chess_move.from_row == en_passant_rank
            {
                next.tiles[chess_move.from_row as usize][chess_move.to_col as usize] = EMPTY_TILE;
            }

            // Castling also relocates the paired rook.
            if piece.kind == PieceKind::King && chess_move.is_castling_shape() {
                let (rook_from, rook_to, rook_code) =
                    castling_rook_transfer(chess_move);
                next.tiles[rook_from.0][rook_from.1] = EMPTY_TILE;
                next.tiles[rook_to.0][rook_to.1] = rook_code;
            }
        }

        next.tiles[chess_move.to_row as usize][chess_move.to_col as usize] = moving;
        next.tiles[chess_move.from_row as usize][chess_move.from_col as usize] = EMPTY_TILE;
        next
    }
}

/// For one of the four castling moves, the rook's origin, destination, and
/// tile code.
fn castling_rook_transfer(
    chess_move: &Move,
) -> ((usize, usize), (usize, usize), TileCode) {
    match (chess_move.from_row, chess_move.from_col, chess_move.to_row, chess_move.to_col) {
        (0, 3, 0, 1) => ((0, 0), (0, 2), '5'),
        (0, 3, 0, 5) => ((0, 7), (0, 4), '5'),
        (7, 3, 7, 1) => ((7, 0), (7, 2), 'B'),
        _ => ((7, 7), (7, 4), 'B'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_round_trips() {
        let board = Board::opening_position();
        assert_eq!(board.to_tile_string(), OPENING_POSITION);
        // White king on d1, black king on d8 in this layout.
        assert_eq!(board.find_king(PieceColor::White), Some((0, 3)));
        assert_eq!(board.find_king(PieceColor::Black), Some((7, 3)));
    }

    #[test]
    fn malformed_tile_strings_are_rejected() {
        assert_eq!(
            Board::from_tile_string("000"),
            Err(ChessErrors::InvalidTileStringLength(3))
        );
        let mut bad = String::from(OPENING_POSITION);
        bad.replace_range(0..1, "Z");
        assert_eq!(Board::from_tile_string(&bad), Err(ChessErrors::InvalidTileCode('Z')));
    }

    #[test]
    fn preview_relocates_and_clears_origin() {
        let board = Board::opening_position();
        let next = board.preview_move(&Move::new(1, 4, 3, 4));
        assert_eq!(next.tile(3, 4), '6');
        assert!(next.is_empty(1, 4));
        // Original board untouched.
        assert_eq!(board.tile(1, 4), '6');
    }

    #[test]
    fn preview_removes_en_passant_victim() {
        let mut board = Board::from_tile_string(&"0".repeat(64)).unwrap();
        board.tiles[0][0] = '1';
        board.tiles[7][7] = '7';
        board.tiles[4][3] = '6';
        board.tiles[4][4] = 'C';
        let next = board.preview_move(&Move::new(4, 3, 5, 4));
        assert_eq!(next.tile(5, 4), '6');
        assert!(next.is_empty(4, 4));
        assert!(next.is_empty(4, 3));
    }

    #[test]
    fn preview_moves_the_castling_rook() {
        let mut board = Board::from_tile_string(&"0".repeat(64)).unwrap();
        board.tiles[0][3] = '1';
        board.tiles[0][0] = '5';
        board.tiles[7][3] = '7';
        let next = board.preview_move(&Move::new(0, 3, 0, 1));
        assert_eq!(next.tile(0, 1), '1');
        assert_eq!(next.tile(0, 2), '5');
        assert!(next.is_empty(0, 0));
        assert!(next.is_empty(0, 3));
    }
}
