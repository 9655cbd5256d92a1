//! Random-playout demo.
//!
//! Plays uniformly random legal moves from the opening position through
//! the full validate/apply pipeline, persisting every ply into a
//! `MoveLedger` and re-deriving the `GameState` from the stored tile
//! string each turn — the same stateless-core round trip a real shell
//! performs against its database.

use rand::prelude::IndexedRandom;

use parlor_chess::apply_move_to_game::try_apply_move;
use parlor_chess::board::OPENING_POSITION;
use parlor_chess::chess_errors::ChessErrors;
use parlor_chess::chess_move::Move;
use parlor_chess::game_state::{GameState, Status};
use parlor_chess::move_ledger::{MoveLedger, MoveRecord};
use parlor_chess::render_board::render_board;
use parlor_chess::rules::validate_move::is_valid_move;

const MAX_PLIES: usize = 200;

/// Every legal move for the side to move, found the same way the
/// checkmate search finds escapes: the flat origin/destination sweep.
fn legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    for from_row in 0..8u8 {
        for from_col in 0..8u8 {
            match game_state.board.piece_at(from_row, from_col) {
                Some(piece) if piece.color == game_state.side_to_move => {}
                _ => continue,
            }
            for to_row in 0..8u8 {
                for to_col in 0..8u8 {
                    let candidate = Move::new(from_row, from_col, to_row, to_col);
                    if is_valid_move(game_state, &candidate) {
                        moves.push(candidate);
                    }
                }
            }
        }
    }
    moves
}

fn main() -> Result<(), ChessErrors> {
    let mut rng = rand::rng();
    let mut ledger = MoveLedger::new();
    let mut tiles = String::from(OPENING_POSITION);

    for ply in 1..=MAX_PLIES {
        let game_state = ledger.game_state(&tiles)?;
        let moves = legal_moves(&game_state);

        let Some(chosen) = moves.as_slice().choose(&mut rng) else {
            // No legal move and no checkmate reported on the previous ply:
            // a stalemate-shaped dead end, which this rule set does not
            // classify further.
            println!("ply {ply}: no legal moves for {:?}", game_state.side_to_move);
            break;
        };

        let outcome = try_apply_move(&game_state, chosen)?;
        ledger.record(MoveRecord::from_outcome(chosen, &outcome));
        tiles = outcome.game_state.board.to_tile_string();

        println!(
            "ply {ply}: {:?} ({},{}) -> ({},{}) captured {:?} status {:?}",
            game_state.side_to_move,
            chosen.from_row,
            chosen.from_col,
            chosen.to_row,
            chosen.to_col,
            outcome.captured,
            outcome.status,
        );

        if outcome.status == Status::Checkmate {
            println!("{}", render_board(&outcome.game_state.board));
            println!("checkmate after {} plies", ledger.ply_count());
            return Ok(());
        }
    }

    let final_state = ledger.game_state(&tiles)?;
    println!("{}", render_board(&final_state.board));
    println!("finished after {} plies", ledger.ply_count());
    Ok(())
}
