//! Status consistency invariant: the status matches what the rules say.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules;
use crate::types::GameStatus;

/// Invariant: a game that has not started has an empty board, and a
/// started game's status is what the rules derive from its board.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match engine.status() {
            GameStatus::NotStarted => engine.board().occupied() == 0,
            status => status == rules::evaluate(engine.board()),
        }
    }

    fn description() -> &'static str {
        "Status agrees with the rules applied to the board"
    }
}
