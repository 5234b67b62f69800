//! Rendering tests against an in-memory terminal.

use ratatui::{Terminal, backend::TestBackend};
use std::time::{Duration, Instant};
use tictactoe_term::input::Action;
use tictactoe_term::{App, Muted, Settings, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_idle_screen() {
    let app = App::new(&Settings::default(), Box::new(Muted));
    let screen = render(&app);
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Press Start Game"));
    assert!(screen.contains("Cell 5, empty"));
}

#[test]
fn test_started_screen_shows_turn_and_names() {
    let mut app = App::new(&Settings::default(), Box::new(Muted)).with_names("Ann", "Bob");
    app.apply(Action::Start, Instant::now());
    let screen = render(&app);
    assert!(screen.contains("Ann's Turn (X)"));
    assert!(screen.contains("The game is started"));
    assert!(screen.contains("Bob"));
}

#[test]
fn test_winner_popup_rendered() {
    let mut app = App::new(&Settings::default(), Box::new(Muted)).with_names("Ann", "");
    let mut now = Instant::now();
    app.apply(Action::Start, now);
    for cell in [0, 1, 4, 2, 8] {
        now += Duration::from_millis(400);
        app.apply(Action::SelectCell(cell), now);
    }
    let screen = render(&app);
    assert!(screen.contains("Winner"));
    assert!(screen.contains("has won the game!"));
    assert!(screen.contains("Press Esc to close"));
}
