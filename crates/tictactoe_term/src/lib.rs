//! Terminal front end for the tic-tac-toe engine.
//!
//! The engine in [`tictactoe_core`] decides what happens; this crate
//! decides how it looks and sounds. [`App`] holds all view state and is
//! driven by key presses, [`ui::draw`] paints it, and [`terminal::run`]
//! owns the real terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod audio;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod input;
pub mod logging;
pub mod name_field;
pub mod scheduler;
pub mod script;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use audio::{AudioError, Muted, SoundCue, SoundPlayer, TerminalBell};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
