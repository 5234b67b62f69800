//! History consistency invariant: one history entry per claimed cell.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().len() == engine.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    #[test]
    fn test_moves_hold() {
        let mut engine = GameEngine::new();
        engine.start("", "");
        for i in [0, 1, 2, 3] {
            engine.apply_move(i);
        }
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 4);
    }

    #[test]
    fn test_unrecorded_cell_violates() {
        let mut engine = GameEngine::new();
        engine.start("", "");
        engine.apply_move(4);
        engine.board.force(0, Cell::Occupied(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
