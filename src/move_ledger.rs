//! The persistence boundary: per-game move records and snapshot rebuild.
//!
//! The engine is a stateless core around a stateful shell. Castling flags
//! and en passant history are never maintained incrementally: before each
//! validation the shell re-derives a `GameState` from the stored tile
//! string plus the move log, exactly as the durable schema does ("does any
//! move record exist whose origin equals this tracked square"). This
//! module models that collaborator interface without any database.

use chrono::{DateTime, Utc};

use crate::apply_move_to_game::MoveOutcome;
use crate::board::Board;
use crate::chess_errors::ChessErrors;
use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_table::{PieceColor, TileCode};

/// One stored row of the move log. Mirrors the durable schema: the piece's
/// tile code, the four coordinates, an always-empty `promote_to` column
/// (promotion is not implemented by this engine), the captured tile code
/// if any, and the insertion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: TileCode,
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    pub promote_to: Option<TileCode>,
    pub captured: Option<TileCode>,
    pub created_at: DateTime<Utc>,
}

impl MoveRecord {
    /// Record a move the engine just applied.
    pub fn from_outcome(chess_move: &Move, outcome: &MoveOutcome) -> Self {
        MoveRecord {
            piece: outcome.game_state.last_piece_moved.unwrap_or('0'),
            from_row: chess_move.from_row,
            from_col: chess_move.from_col,
            to_row: chess_move.to_row,
            to_col: chess_move.to_col,
            promote_to: None,
            captured: outcome.captured,
            created_at: Utc::now(),
        }
    }

    pub fn chess_move(&self) -> Move {
        Move::new(self.from_row, self.from_col, self.to_row, self.to_col)
    }
}

/// Ordered move log for one game.
#[derive(Debug, Clone, Default)]
pub struct MoveLedger {
    records: Vec<MoveRecord>,
}

/// The six origin squares whose vacation burns a castling right:
/// white rook a1, white king, white rook h1, then the black mirror.
const TRACKED_ORIGINS: [(u8, u8); 6] = [(0, 0), (0, 3), (0, 7), (7, 0), (7, 3), (7, 7)];

impl MoveLedger {
    pub fn new() -> Self {
        MoveLedger { records: Vec::new() }
    }

    pub fn record(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn ply_count(&self) -> usize {
        self.records.len()
    }

    /// White moves on even ply counts. This is where turn order lives; the
    /// engine itself does not enforce it.
    pub fn side_to_move(&self) -> PieceColor {
        if self.records.len() % 2 == 0 {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }

    /// Whether any recorded move originated on the given square. Castling
    /// rights derive from this: once the tracked origin has been vacated,
    /// the right is gone for the rest of the game.
    pub fn piece_has_moved(&self, row: u8, col: u8) -> bool {
        self.records
            .iter()
            .any(|record| record.from_row == row && record.from_col == col)
    }

    /// Rebuild the engine-facing snapshot from the persisted tile string
    /// and this log — the per-call reconstruction the stateless core
    /// expects.
    pub fn game_state(&self, tiles: &str) -> Result<GameState, ChessErrors> {
        let board = Board::from_tile_string(tiles)?;
        for color in [PieceColor::White, PieceColor::Black] {
            if board.find_king(color).is_none() {
                return Err(ChessErrors::KingNotFound(color));
            }
        }
        let [wr0, wk, wr7, br0, bk, br7] =
            TRACKED_ORIGINS.map(|(row, col)| self.piece_has_moved(row, col));
        Ok(GameState {
            board,
            side_to_move: self.side_to_move(),
            last_piece_moved: self.last().map(|record| record.piece),
            last_move: self.last().map(|record| record.chess_move()),
            white_king_moved: wk,
            white_rook_0_moved: wr0,
            white_rook_7_moved: wr7,
            black_king_moved: bk,
            black_rook_0_moved: br0,
            black_rook_7_moved: br7,
        })
    }
}
