//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Mark;

/// Invariant: moves alternate starting with X, the board holds as many X
/// as O or one more, and the current mark follows from the history.
///
/// While in progress the current mark is the next mover. Once the game is
/// over it stays on the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        let board = engine.board();
        let (xs, os) = (board.count(Mark::X), board.count(Mark::O));
        if xs < os || xs - os > 1 {
            return false;
        }

        let expected = match history.last() {
            None => Mark::X,
            Some(last) if engine.status().is_in_progress() => last.mark.opponent(),
            Some(last) => last.mark,
        };
        engine.current_mark() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new();
        engine.start("", "");
        engine.apply_move(4);
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_mark(), Mark::O);
    }

    #[test]
    fn test_finished_game_holds() {
        let mut engine = GameEngine::new();
        engine.start("", "");
        for i in [0, 3, 1, 4, 2] {
            engine.apply_move(i);
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut engine = GameEngine::new();
        engine.start("", "");
        engine.apply_move(0);
        engine.history.push(Move::new(1, Mark::X));
        engine.board.place(1, Mark::X);
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
