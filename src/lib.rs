//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes the board model, the per-piece rule predicates, the
//! check/checkmate detectors, the state transition, and the persistence
//! boundary helpers so binaries, tests, and external callers can import
//! stable module paths.

pub mod apply_move_to_game;
pub mod board;
pub mod chess_errors;
pub mod chess_move;
pub mod game_state;
pub mod move_ledger;
pub mod piece_table;
pub mod render_board;

pub mod rules {
    pub mod general_rules;
    pub mod inspect_check;
    pub mod king_rules;
    pub mod knight_rules;
    pub mod pawn_rules;
    pub mod sliding_rules;
    pub mod validate_move;
}
