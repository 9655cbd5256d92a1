//! Errors used throughout the rules engine.
//!
//! The engine itself signals rejection, not failure: an illegal move is an
//! expected outcome, so validation returns `false` or
//! `Err(ChessErrors::IllegalMove)` rather than panicking. The remaining
//! variants belong to the persistence boundary, where stored tile strings
//! are parsed back into boards.

use crate::piece_table::PieceColor;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The proposed move fails the general gate, its piece-shape rule, an
    /// obstruction check, or the self-check veto. Always a rejection the
    /// caller should surface to the player, never an internal fault.
    IllegalMove,

    /// A persisted tile string contained a character outside the 13-entry
    /// alphabet.
    ///
    /// Payload: the offending character.
    InvalidTileCode(char),

    /// A persisted tile string was not exactly 64 characters.
    ///
    /// Payload: the actual length.
    InvalidTileStringLength(usize),

    /// A board that must contain a king for the given color does not.
    /// Indicates corrupted stored state; play never removes a king.
    KingNotFound(PieceColor),
}
