//! Reasons a move was not applied.

use crate::position::Position;
use crate::types::GameStatus;

/// Why the engine ignored a move.
///
/// The engine treats every one of these as a no-op. The type exists so
/// callers and logs can tell a late click from a malformed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Status was not `InProgress`.
    #[display("Game is not in progress (status: {_0})")]
    NotInProgress(GameStatus),

    /// Index outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),
}

impl std::error::Error for MoveRejection {}
