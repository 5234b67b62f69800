//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the engine
//! so the invariants and tests can evaluate boards that never went
//! through a game.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board after a mark was placed.
///
/// A completed triple wins even on a full board; a full board without one
/// is a tie; anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}
