//! Sound feedback.
//!
//! Playback is fire-and-forget: failures are logged and dropped, and never
//! reach the game state.

use derive_more::{Display, Error};
use std::io::{self, Write};
use tracing::{debug, instrument, warn};

/// Sounds the front end knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A mark was placed.
    Click,
    /// Someone won.
    Celebration,
}

impl SoundCue {
    /// Number of terminal bells rung for this cue.
    fn bells(self) -> usize {
        match self {
            SoundCue::Click => 1,
            SoundCue::Celebration => 3,
        }
    }
}

/// Something that can play a [`SoundCue`].
pub trait SoundPlayer {
    /// Plays a cue.
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

/// Plays cues on the terminal bell.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    /// Rings the bell on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    /// Rings the bell on `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        let bells = "\x07".repeat(cue.bells());
        self.out
            .write_all(bells.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| AudioError::new(format!("Bell write failed: {}", e)))
    }
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl SoundPlayer for Muted {
    fn play(&mut self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Plays `cue`, logging and swallowing any failure.
#[instrument(skip(player))]
pub fn play_or_log(player: &mut dyn SoundPlayer, cue: SoundCue) {
    match player.play(cue) {
        Ok(()) => debug!("Sound played"),
        Err(error) => warn!(%error, "Error playing sound"),
    }
}

/// Audio playback error.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
