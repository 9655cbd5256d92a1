//! Immutable snapshot of everything needed to judge the next move.
//!
//! A `GameState` is rebuilt from persisted data before each validation and
//! is never mutated: applying a move produces a new value. History is kept
//! at ply-granularity depth 1 (the last move and who made it), which is
//! exactly what en passant needs, plus six permanent has-moved flags for
//! castling rights.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_table::{PieceColor, TileCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Derived externally from ply-count parity; the engine records it but
    /// does not enforce it (whose turn it is belongs to the calling shell).
    pub side_to_move: PieceColor,
    /// The piece that made the immediately preceding ply, if any.
    pub last_piece_moved: Option<TileCode>,
    /// The immediately preceding ply, if any.
    pub last_move: Option<Move>,
    // Castling rights are revoked permanently once the relevant origin
    // square has ever been vacated by its original occupant.
    pub white_king_moved: bool,
    pub white_rook_0_moved: bool,
    pub white_rook_7_moved: bool,
    pub black_king_moved: bool,
    pub black_rook_0_moved: bool,
    pub black_rook_7_moved: bool,
}

impl GameState {
    /// Fresh game: opening board, white to move, no history, all castling
    /// rights intact.
    pub fn new_game() -> Self {
        GameState {
            board: Board::opening_position(),
            side_to_move: PieceColor::White,
            last_piece_moved: None,
            last_move: None,
            white_king_moved: false,
            white_rook_0_moved: false,
            white_rook_7_moved: false,
            black_king_moved: false,
            black_rook_0_moved: false,
            black_rook_7_moved: false,
        }
    }

    /// Snapshot over an arbitrary board with no history. Used by tests and
    /// by callers that only need check detection.
    pub fn from_board(board: Board, side_to_move: PieceColor) -> Self {
        GameState { board, side_to_move, ..GameState::new_game() }
    }
}

/// Persisted game status. Only `Active`, `Check`, and `Checkmate` are ever
/// produced by the engine; the administrative variants are set by the
/// collaborators around it and round-trip through the same integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    PendingInvitation,
    Active,
    Check,
    DrawProposed,
    DrawAccepted,
    Resign,
    Checkmate,
}

impl Status {
    /// The stored integer code.
    pub const fn as_code(self) -> u8 {
        match self {
            Status::PendingInvitation => 0,
            Status::Active => 1,
            Status::Check => 2,
            Status::DrawProposed => 3,
            Status::DrawAccepted => 4,
            Status::Resign => 5,
            Status::Checkmate => 6,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Status::PendingInvitation),
            1 => Some(Status::Active),
            2 => Some(Status::Check),
            3 => Some(Status::DrawProposed),
            4 => Some(Status::DrawAccepted),
            5 => Some(Status::Resign),
            6 => Some(Status::Checkmate),
            _ => None,
        }
    }
}
