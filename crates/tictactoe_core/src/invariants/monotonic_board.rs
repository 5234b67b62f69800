//! Monotonic board invariant: cells never change once claimed.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Board, Cell};

/// Invariant: replaying the history onto an empty board reproduces the
/// current board, and no move targets a claimed cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new();
        for mv in engine.history() {
            if replayed.get(mv.index) != Some(Cell::Empty) {
                return false;
            }
            replayed.place(mv.index, mv.mark);
        }
        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
