//! Application state and logic.
//!
//! Owns the engine and every piece of view state around it. Nothing here
//! touches the terminal, so the whole flow runs in tests.

use crate::audio::{self, SoundCue, SoundPlayer};
use crate::config::Settings;
use crate::debounce::ClickGate;
use crate::input::{self, Action, Focus};
use crate::name_field::NameField;
use crate::scheduler::CueScheduler;
use crossterm::event::KeyEvent;
use std::time::{Duration, Instant};
use tictactoe_core::{Effect, GameEngine, Position, Snapshot, accessibility, announce};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    engine: GameEngine,
    snapshot: Snapshot,
    name_x: NameField,
    name_o: NameField,
    focus: Focus,
    cursor: Position,
    status: String,
    status_label: String,
    popup: Option<String>,
    gate: ClickGate,
    cues: CueScheduler,
    sound: Box<dyn SoundPlayer>,
    celebration_delay: Duration,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("snapshot", &self.snapshot)
            .field("focus", &self.focus)
            .field("cursor", &self.cursor)
            .field("status", &self.status)
            .field("popup", &self.popup)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates an application waiting for the players to start.
    pub fn new(settings: &Settings, sound: Box<dyn SoundPlayer>) -> Self {
        let engine = GameEngine::new();
        let snapshot = engine.snapshot();
        Self {
            engine,
            snapshot,
            name_x: NameField::default(),
            name_o: NameField::default(),
            focus: Focus::default(),
            cursor: Position::default(),
            status: String::new(),
            status_label: String::new(),
            popup: None,
            gate: ClickGate::new(settings.debounce()),
            cues: CueScheduler::new(),
            sound,
            celebration_delay: settings.celebration_delay(),
            should_quit: false,
        }
    }

    /// Pre-fills the name fields.
    pub fn with_names(mut self, x: &str, o: &str) -> Self {
        self.name_x = NameField::new(x);
        self.name_o = NameField::new(o);
        self
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if let Some(action) = input::map_key(key, self.focus) {
            self.apply(action, now);
        }
    }

    /// Performs an action.
    #[instrument(skip(self, now))]
    pub fn apply(&mut self, action: Action, now: Instant) {
        // While the popup is up, confirming closes it instead of playing.
        if self.popup.is_some() && action == Action::SelectCursor {
            self.close_popup();
            return;
        }

        match action {
            Action::Start => self.start(),
            Action::Reset => self.reset(),
            Action::ClosePopup => self.close_popup(),
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::SelectCursor => self.select(self.cursor.to_index(), now),
            Action::SelectCell(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.select(index, now);
            }
            Action::Type(c) => {
                if let Some(field) = self.focused_name_mut() {
                    field.push(c);
                }
            }
            Action::Backspace => {
                if let Some(field) = self.focused_name_mut() {
                    field.pop();
                }
            }
        }
    }

    /// Starts a game with the names currently typed.
    pub fn start(&mut self) {
        self.snapshot = self.engine.start(self.name_x.value(), self.name_o.value());
        self.status = announce::STARTED.to_string();
        self.status_label = match (self.snapshot.active_name(), *self.snapshot.active_mark()) {
            (Some(name), Some(mark)) => announce::started_label(name, mark),
            _ => announce::STARTED.to_string(),
        };
        self.popup = None;
        self.cues.clear();
        self.focus = Focus::Board;
    }

    /// Returns to the idle state and clears the name fields.
    pub fn reset(&mut self) {
        self.snapshot = self.engine.reset();
        self.name_x.clear();
        self.name_o.clear();
        self.status.clear();
        self.status_label.clear();
        self.popup = None;
        self.cues.clear();
        self.focus = Focus::NameX;
    }

    /// Hides the winner popup.
    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    /// Plays the cell at `index`, subject to the rules and the click gate.
    #[instrument(skip(self, now))]
    fn select(&mut self, index: usize, now: Instant) {
        // Clicks the engine would ignore never count against the gate.
        if let Err(rejection) = self.engine.check_move(index) {
            debug!(%rejection, "Click ignored");
            return;
        }
        if !self.gate.admit(now) {
            return;
        }

        let result = self.engine.apply_move(index);
        for effect in result.effects() {
            match effect {
                Effect::MovePlaced(mv) => {
                    debug!(%mv, "Mark placed");
                    audio::play_or_log(self.sound.as_mut(), SoundCue::Click);
                }
                Effect::GameWon { mark, name } => {
                    info!(%mark, %name, "Showing winner");
                    let message = announce::winner_message(&name);
                    self.status_label = message.clone();
                    self.popup = Some(message);
                    self.cues
                        .schedule(SoundCue::Celebration, now + self.celebration_delay);
                }
                Effect::GameTied => {
                    self.status_label = announce::TIE.to_string();
                }
            }
        }
        self.snapshot = result.snapshot().clone();
    }

    /// Plays any cues that have come due.
    pub fn tick(&mut self, now: Instant) {
        for cue in self.cues.drain_due(now) {
            audio::play_or_log(self.sound.as_mut(), cue);
        }
    }

    fn focused_name_mut(&mut self) -> Option<&mut NameField> {
        match self.focus {
            Focus::NameX => Some(&mut self.name_x),
            Focus::NameO => Some(&mut self.name_o),
            Focus::Board => None,
        }
    }

    /// Latest engine snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The turn line: whose turn, the result, or the idle prompt.
    pub fn turn_line(&self) -> String {
        announce::turn_line(&self.snapshot)
    }

    /// Game status line ("The game is started" or empty).
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Accessible description of the game status.
    pub fn status_label(&self) -> &str {
        &self.status_label
    }

    /// Winner popup text, when shown.
    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    /// Focused widget.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Label for the cell under the cursor.
    pub fn cursor_label(&self) -> String {
        let index = self.cursor.to_index();
        accessibility::cell_label(index, self.snapshot.board().cells()[index])
    }

    /// X's name field.
    pub fn name_x(&self) -> &NameField {
        &self.name_x
    }

    /// O's name field.
    pub fn name_o(&self) -> &NameField {
        &self.name_o
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
