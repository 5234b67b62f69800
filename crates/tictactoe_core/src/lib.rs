//! Tic-tac-toe rules engine.
//!
//! [`GameEngine`] owns a single game: the 3x3 board, whose turn it is, the
//! game status and the players' display names. Callers drive it with
//! [`GameEngine::start`], [`GameEngine::apply_move`] and
//! [`GameEngine::reset`], and render from the returned [`Snapshot`].
//!
//! Illegal moves are no-ops rather than errors. Rendering, sound and input
//! throttling belong to the caller; the engine only reports [`Effect`]s.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Mark};
//!
//! let mut engine = GameEngine::new();
//! engine.start("<Ann>", "");
//! for index in [0, 1, 4, 2, 8] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Mark::X));
//! assert_eq!(engine.names().x(), "Ann");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod accessibility;
pub mod announce;
mod effects;
mod engine;
mod error;
pub mod invariants;
pub mod names;
mod position;
pub mod rules;
mod types;

pub use effects::Effect;
pub use engine::{GameEngine, MoveResult, Snapshot};
pub use error::MoveRejection;
pub use names::PlayerNames;
pub use position::Position;
pub use types::{Board, CELL_COUNT, Cell, GameStatus, Mark, Move};
