//! Headless play: run a fixed move list and report the outcome.

use serde::Serialize;
use tictactoe_core::{Effect, GameEngine, Snapshot};
use tracing::{info, instrument};

/// A move the engine ignored, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ignored {
    /// Position in the move list.
    pub step: usize,
    /// The requested cell.
    pub index: usize,
    /// Why it was ignored.
    pub reason: String,
}

/// Result of a scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Final engine state.
    pub snapshot: Snapshot,
    /// Rendered board.
    pub board: String,
    /// Effects raised along the way.
    pub effects: Vec<Effect>,
    /// Moves that were not applied.
    pub ignored: Vec<Ignored>,
}

/// Starts a game with the given names and plays `moves` in order.
#[instrument(skip(x_name, o_name))]
pub fn run(x_name: &str, o_name: &str, moves: &[usize]) -> ScriptReport {
    let mut engine = GameEngine::new();
    engine.start(x_name, o_name);

    let mut effects = Vec::new();
    let mut ignored = Vec::new();
    for (step, &index) in moves.iter().enumerate() {
        if let Err(rejection) = engine.check_move(index) {
            ignored.push(Ignored {
                step,
                index,
                reason: rejection.to_string(),
            });
            continue;
        }
        effects.extend(engine.apply_move(index).effects());
    }

    let snapshot = engine.snapshot();
    info!(status = %snapshot.status(), ignored = ignored.len(), "Script finished");
    ScriptReport {
        board: snapshot.board().to_string(),
        snapshot,
        effects,
        ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{GameStatus, Mark};

    #[test]
    fn test_diagonal_script() {
        let report = run("", "", &[0, 1, 4, 2, 8]);
        assert_eq!(*report.snapshot.status(), GameStatus::Won(Mark::X));
        assert_eq!(report.board, "X|O|O\n-+-+-\n4|X|6\n-+-+-\n7|8|X");
        assert!(report.ignored.is_empty());
        assert_eq!(report.effects.len(), 6);
    }

    #[test]
    fn test_ignored_moves_are_reported() {
        let report = run("", "", &[4, 4, 12]);
        assert_eq!(report.ignored.len(), 2);
        assert_eq!(report.ignored[0].step, 1);
        assert_eq!(report.ignored[0].reason, "Center is already occupied");
        assert_eq!(report.ignored[1].index, 12);
    }
}
