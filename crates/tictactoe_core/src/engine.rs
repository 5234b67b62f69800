//! The tic-tac-toe state machine.

use crate::effects::{self, Effect};
use crate::error::MoveRejection;
use crate::invariants;
use crate::names::PlayerNames;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Move};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Owns one game: board, turn, status, names and move history.
///
/// Engines are plain values; any number can coexist. Every operation
/// runs to completion and returns data for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current: Mark,
    pub(crate) status: GameStatus,
    pub(crate) names: PlayerNames,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine waiting for [`GameEngine::start`].
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game with the given raw display names.
    ///
    /// Names are sanitized here; empty results fall back to the defaults.
    /// Accepted from any status, so it doubles as "restart".
    #[instrument(skip(self, raw_x, raw_o))]
    pub fn start(&mut self, raw_x: &str, raw_o: &str) -> Snapshot {
        self.names = PlayerNames::from_raw(raw_x, raw_o);
        self.board = Board::new();
        self.history.clear();
        self.current = Mark::X;
        self.status = GameStatus::InProgress;
        info!(x = %self.names.x(), o = %self.names.o(), "Game started");
        self.snapshot()
    }

    /// Places the current mark at `index` when the move is legal.
    ///
    /// Illegal moves leave the engine untouched; the result then carries
    /// no placed move.
    #[instrument(skip(self), fields(mark = %self.current, status = %self.status))]
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        let placed = match self.try_apply_move(index) {
            Ok(mv) => Some(mv),
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                None
            }
        };
        MoveResult {
            snapshot: self.snapshot(),
            placed,
        }
    }

    /// Like [`GameEngine::apply_move`], but reports why a move was ignored.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<Move, MoveRejection> {
        self.check_move(index)?;

        let mv = Move::new(index, self.current);
        self.board.place(index, mv.mark);
        self.history.push(mv);

        self.status = rules::evaluate(&self.board);
        match self.status {
            GameStatus::InProgress => self.current = self.current.opponent(),
            GameStatus::Won(mark) => info!(%mark, winner = %self.names.get(mark), "Game won"),
            GameStatus::Tied => info!("Game tied"),
            GameStatus::NotStarted => {}
        }
        debug!(%mv, status = %self.status, "Move applied");

        invariants::assert_invariants(self);
        Ok(mv)
    }

    /// Checks whether a move at `index` would be accepted, without applying it.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveRejection> {
        if !self.status.is_in_progress() {
            return Err(MoveRejection::NotInProgress(self.status));
        }
        let position = Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))?;
        if !self.board.is_empty(index) {
            return Err(MoveRejection::CellOccupied(position));
        }
        Ok(position)
    }

    /// Returns true when a move at `index` would be accepted.
    pub fn is_playable(&self, index: usize) -> bool {
        self.check_move(index).is_ok()
    }

    /// Clears the board and names and returns to `NotStarted`.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        *self = Self::default();
        info!("Game reset");
        self.snapshot()
    }

    /// Returns a read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            status: self.status,
            active_mark: self.status.is_in_progress().then_some(self.current),
            names: self.names.clone(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the mark to move, or the last mover once the game is over.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// Returns the player names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Returns the moves accepted since the last start or reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

/// Immutable view of an engine, for rendering and labeling.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Game status.
    status: GameStatus,
    /// Mark to move; `None` unless the game is in progress.
    active_mark: Option<Mark>,
    /// Display names of both seats.
    names: PlayerNames,
}

impl Snapshot {
    /// Display name of the player to move.
    pub fn active_name(&self) -> Option<&str> {
        self.active_mark.map(|mark| self.names.get(mark))
    }

    /// Display name of the winner.
    pub fn winner_name(&self) -> Option<&str> {
        self.status.winner().map(|mark| self.names.get(mark))
    }
}

/// Outcome of [`GameEngine::apply_move`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveResult {
    /// State after the call.
    snapshot: Snapshot,
    /// The move placed, or `None` when the call was a no-op.
    placed: Option<Move>,
}

impl MoveResult {
    /// Returns true when a mark was placed.
    pub fn is_accepted(&self) -> bool {
        self.placed.is_some()
    }

    /// Post-transition hooks for the caller to act on.
    pub fn effects(&self) -> Vec<Effect> {
        effects::effects_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn started() -> GameEngine {
        let mut engine = GameEngine::new();
        engine.start("", "");
        engine
    }

    #[test]
    fn test_new_engine_not_started() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert_eq!(engine.current_mark(), Mark::X);
        assert_eq!(engine.names(), &PlayerNames::default());
    }

    #[test]
    fn test_move_before_start_is_noop() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(4);
        assert!(!result.is_accepted());
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_legal_move_flips_turn() {
        let mut engine = started();
        let result = engine.apply_move(4);
        assert_eq!(*result.placed(), Some(Move::new(4, Mark::X)));
        assert_eq!(engine.board().get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(*result.snapshot().active_mark(), Some(Mark::O));
    }

    #[test]
    fn test_rejection_reasons() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.try_apply_move(0),
            Err(MoveRejection::NotInProgress(GameStatus::NotStarted))
        );
        engine.start("", "");
        assert_eq!(engine.try_apply_move(9), Err(MoveRejection::OutOfRange(9)));
        engine.apply_move(0);
        assert_eq!(
            engine.try_apply_move(0),
            Err(MoveRejection::CellOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_snapshot_hides_mark_when_terminal() {
        let mut engine = started();
        for i in [0, 3, 1, 4, 2] {
            engine.apply_move(i);
        }
        let snapshot = engine.snapshot();
        assert_eq!(*snapshot.status(), GameStatus::Won(Mark::X));
        assert_eq!(*snapshot.active_mark(), None);
        assert_eq!(snapshot.active_name(), None);
        assert_eq!(snapshot.winner_name(), Some("Player 1"));
    }

    #[test]
    fn test_start_mid_game_restarts() {
        let mut engine = started();
        engine.apply_move(0);
        engine.apply_move(1);
        let snapshot = engine.start("A", "B");
        assert_eq!(snapshot.board(), &Board::new());
        assert_eq!(snapshot.active_name(), Some("A"));
        assert!(engine.history().is_empty());
    }
}
