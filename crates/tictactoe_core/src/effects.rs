//! Post-transition hooks.
//!
//! The engine never plays sounds or waits on timers. It reports what just
//! happened and the caller decides what to do about it.

use crate::engine::MoveResult;
use crate::types::{GameStatus, Mark, Move};
use serde::{Deserialize, Serialize};

/// Something a caller may react to after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A mark was placed.
    MovePlaced(Move),
    /// The move completed a triple.
    GameWon {
        /// Winning mark.
        mark: Mark,
        /// Winner's display name.
        name: String,
    },
    /// The move filled the board without a winner.
    GameTied,
}

/// Lists the effects of a move, in the order they happened.
///
/// Ignored moves produce nothing, even when the game is already over.
pub fn effects_of(result: &MoveResult) -> Vec<Effect> {
    let Some(placed) = *result.placed() else {
        return Vec::new();
    };

    let snapshot = result.snapshot();
    let mut effects = vec![Effect::MovePlaced(placed)];
    match *snapshot.status() {
        GameStatus::Won(mark) => effects.push(Effect::GameWon {
            mark,
            name: snapshot.names().get(mark).to_string(),
        }),
        GameStatus::Tied => effects.push(Effect::GameTied),
        GameStatus::NotStarted | GameStatus::InProgress => {}
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;

    #[test]
    fn test_plain_move_only_places() {
        let mut engine = GameEngine::new();
        engine.start("", "");
        let result = engine.apply_move(0);
        assert_eq!(
            result.effects(),
            vec![Effect::MovePlaced(Move::new(0, Mark::X))]
        );
    }

    #[test]
    fn test_winning_move_reports_winner_after_placement() {
        let mut engine = GameEngine::new();
        engine.start("Ann", "Bob");
        for i in [0, 3, 1, 4] {
            engine.apply_move(i);
        }
        let result = engine.apply_move(2);
        assert_eq!(
            result.effects(),
            vec![
                Effect::MovePlaced(Move::new(2, Mark::X)),
                Effect::GameWon {
                    mark: Mark::X,
                    name: "Ann".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_ignored_move_after_win_has_no_effects() {
        let mut engine = GameEngine::new();
        engine.start("", "");
        for i in [0, 3, 1, 4, 2] {
            engine.apply_move(i);
        }
        assert!(engine.apply_move(8).effects().is_empty());
    }
}
