//! Keyboard handling: key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::Position;

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Name input for X.
    #[default]
    NameX,
    /// Name input for O.
    NameO,
    /// The board.
    Board,
}

impl Focus {
    /// Next widget in tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::NameX => Focus::NameO,
            Focus::NameO => Focus::Board,
            Focus::Board => Focus::NameX,
        }
    }

    /// Previous widget in tab order.
    pub fn prev(self) -> Self {
        match self {
            Focus::NameX => Focus::Board,
            Focus::NameO => Focus::NameX,
            Focus::Board => Focus::NameO,
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start (or restart) the game.
    Start,
    /// Reset to the idle state.
    Reset,
    /// Hide the winner popup.
    ClosePopup,
    /// Leave the application.
    Quit,
    /// Move focus forward.
    FocusNext,
    /// Move focus backward.
    FocusPrev,
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play the cell under the cursor.
    SelectCursor,
    /// Play a cell by index.
    SelectCell(usize),
    /// Type into the focused name field.
    Type(char),
    /// Delete from the focused name field.
    Backspace,
}

/// Maps a key press to an action, given the focused widget.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('s') if ctrl => return Some(Action::Start),
        KeyCode::Char('r') if ctrl => return Some(Action::Reset),
        KeyCode::F(2) => return Some(Action::Start),
        KeyCode::F(5) => return Some(Action::Reset),
        KeyCode::Esc => return Some(Action::ClosePopup),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }
    if ctrl {
        return None;
    }

    match focus {
        Focus::NameX | Focus::NameO => match key.code {
            KeyCode::Char(c) => Some(Action::Type(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Enter => Some(Action::Start),
            KeyCode::Down => Some(Action::FocusNext),
            KeyCode::Up => Some(Action::FocusPrev),
            _ => None,
        },
        Focus::Board => match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Action::MoveCursor(key.code))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char(c) => Position::from_cell_number(&c.to_string())
                .map(|pos| Action::SelectCell(pos.to_index())),
            _ => None,
        },
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // Edges
        _ => cursor,
    }
}
