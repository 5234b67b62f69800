//! Status text shown to (and read out for) the players.

use crate::engine::Snapshot;
use crate::types::{GameStatus, Mark};

/// Prompt shown before a game starts.
pub const IDLE_PROMPT: &str = "Press Start Game";

/// Shown right after a game starts.
pub const STARTED: &str = "The game is started";

/// Shown when the board fills without a winner.
pub const TIE: &str = "It's a Tie! 🤝";

/// `"{name}'s Turn ({mark})"`.
pub fn turn_message(name: &str, mark: Mark) -> String {
    format!("{}'s Turn ({})", name, mark)
}

/// Accessible form of the start announcement.
pub fn started_label(name: &str, mark: Mark) -> String {
    format!("Game started. {}", turn_message(name, mark))
}

/// Celebration line for the winner popup.
pub fn winner_message(name: &str) -> String {
    format!("🎉 {} has won the game! 🥳✨", name)
}

/// The turn line for a snapshot: whose turn it is, the tie message, or
/// the idle prompt. A won game shows the winner.
pub fn turn_line(snapshot: &Snapshot) -> String {
    match *snapshot.status() {
        GameStatus::NotStarted => IDLE_PROMPT.to_string(),
        GameStatus::InProgress => match (snapshot.active_name(), *snapshot.active_mark()) {
            (Some(name), Some(mark)) => turn_message(name, mark),
            _ => IDLE_PROMPT.to_string(),
        },
        GameStatus::Won(mark) => winner_message(snapshot.names().get(mark)),
        GameStatus::Tied => TIE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;

    #[test]
    fn test_turn_line_follows_game() {
        let mut engine = GameEngine::new();
        assert_eq!(turn_line(&engine.snapshot()), "Press Start Game");

        let snapshot = engine.start("Ann", "");
        assert_eq!(turn_line(&snapshot), "Ann's Turn (X)");

        let result = engine.apply_move(0);
        assert_eq!(turn_line(result.snapshot()), "Player 2's Turn (O)");
    }

    #[test]
    fn test_started_label() {
        assert_eq!(
            started_label("Ann", Mark::X),
            "Game started. Ann's Turn (X)"
        );
    }

    #[test]
    fn test_tie_and_win_lines() {
        let mut engine = GameEngine::new();
        engine.start("", "Bo");
        for i in [3, 0, 4, 1, 8, 2] {
            engine.apply_move(i);
        }
        assert_eq!(
            turn_line(&engine.snapshot()),
            "🎉 Bo has won the game! 🥳✨"
        );

        engine.start("", "");
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.apply_move(i);
        }
        assert_eq!(turn_line(&engine.snapshot()), TIE);
    }
}
