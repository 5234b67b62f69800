//! Tests for the game engine lifecycle and rules.

use tictactoe_core::rules::{self, LINES};
use tictactoe_core::{Board, Cell, GameEngine, GameStatus, Mark, PlayerNames};

fn started() -> GameEngine {
    let mut engine = GameEngine::new();
    engine.start("", "");
    engine
}

fn play(engine: &mut GameEngine, moves: &[usize]) {
    for &index in moves {
        engine.apply_move(index);
    }
}

#[test]
fn test_diagonal_win_freezes_board_and_mark() {
    let mut engine = started();
    play(&mut engine, &[0, 1, 4, 2, 8]);

    let x = Cell::Occupied(Mark::X);
    let o = Cell::Occupied(Mark::O);
    let e = Cell::Empty;
    assert_eq!(engine.board().cells(), &[x, o, o, e, x, e, e, e, x]);
    assert_eq!(engine.status(), GameStatus::Won(Mark::X));
    assert_eq!(engine.current_mark(), Mark::X);

    let frozen = engine.clone();
    let result = engine.apply_move(3);
    assert!(!result.is_accepted());
    assert_eq!(engine, frozen);
}

#[test]
fn test_full_board_without_line_ties() {
    // Cells end up X,O,X / X,O,O / O,X,X.
    let mut engine = started();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.status(), GameStatus::Tied);
    assert_eq!(engine.history().len(), 9);
}

#[test]
fn test_tie_layout_evaluates_to_tie() {
    // X,O,X,O,X,O,O,X,O holds no triple. It has more O than X, so it can
    // only be reached by building the board directly.
    let x = Cell::Occupied(Mark::X);
    let o = Cell::Occupied(Mark::O);
    let board = Board::from_cells([x, o, x, o, x, o, o, x, o]);
    assert_eq!(rules::evaluate(&board), GameStatus::Tied);
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut engine = started();
    engine.apply_move(4);
    let before = engine.clone();

    let result = engine.apply_move(4);
    assert!(!result.is_accepted());
    assert_eq!(engine, before);
    assert_eq!(engine.current_mark(), Mark::O);
}

#[test]
fn test_out_of_range_is_noop() {
    let mut engine = started();
    let before = engine.clone();
    engine.apply_move(9);
    engine.apply_move(usize::MAX);
    assert_eq!(engine, before);
}

/// Picks three cells outside `line` that do not form a line themselves.
fn filler_outside(line: [usize; 3]) -> [usize; 3] {
    let others: Vec<usize> = (0..9).filter(|i| !line.contains(i)).collect();
    for (i, &a) in others.iter().enumerate() {
        for (j, &b) in others.iter().enumerate().skip(i + 1) {
            for &c in others.iter().skip(j + 1) {
                if !LINES.contains(&[a, b, c]) {
                    return [a, b, c];
                }
            }
        }
    }
    unreachable!("every line leaves a non-line filler triple")
}

#[test]
fn test_every_line_wins_for_x() {
    for line in LINES {
        let filler = filler_outside(line);
        let mut engine = started();
        play(&mut engine, &[line[0], filler[0], line[1], filler[1], line[2]]);
        assert_eq!(engine.status(), GameStatus::Won(Mark::X), "line {:?}", line);
        assert!(!engine.apply_move(filler[2]).is_accepted());
    }
}

#[test]
fn test_every_line_wins_for_o() {
    for line in LINES {
        let filler = filler_outside(line);
        let mut engine = started();
        play(
            &mut engine,
            &[filler[0], line[0], filler[1], line[1], filler[2], line[2]],
        );
        assert_eq!(engine.status(), GameStatus::Won(Mark::O), "line {:?}", line);
        assert_eq!(engine.current_mark(), Mark::O);
    }
}

#[test]
fn test_reset_then_start_reproduces_initial_state() {
    let mut fresh = GameEngine::new();
    fresh.start("Ann", "Bob");

    let mut used = GameEngine::new();
    used.start("Zed", "Yan");
    play(&mut used, &[0, 3, 1, 4, 2]);
    used.reset();
    used.start("Ann", "Bob");

    assert_eq!(used, fresh);
}

#[test]
fn test_reset_leaves_game_inactive() {
    let mut engine = started();
    engine.apply_move(0);
    let snapshot = engine.reset();

    assert_eq!(*snapshot.status(), GameStatus::NotStarted);
    assert_eq!(snapshot.board(), &Board::new());
    assert_eq!(snapshot.names(), &PlayerNames::default());
    assert!(!engine.apply_move(1).is_accepted());

    // Idempotent.
    let again = engine.reset();
    assert_eq!(again, snapshot);
}

#[test]
fn test_start_sanitizes_names() {
    let mut engine = GameEngine::new();
    let snapshot = engine.start("<script>", &"a".repeat(25));
    assert_eq!(snapshot.names().x(), "script");
    assert_eq!(snapshot.names().o(), &"a".repeat(20));
    assert_eq!(snapshot.active_name(), Some("script"));
    assert_eq!(*snapshot.active_mark(), Some(Mark::X));
}

#[test]
fn test_engines_are_independent() {
    let mut a = started();
    let b = started();
    a.apply_move(0);
    assert_eq!(b.board(), &Board::new());
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = started();
    engine.apply_move(4);
    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["active_mark"], "O");
    assert_eq!(json["names"]["x"], "Player 1");
}
