//! Screen-reader text for board cells.
//!
//! Labels are derived from the same [`Board`] the view paints, so the two
//! can never disagree.

use crate::types::{Board, CELL_COUNT, Cell, Mark};

/// Describes one cell, e.g. `"Cell 5, marked with X"`.
///
/// Cells are numbered from 1 for people.
pub fn cell_label(index: usize, cell: Cell) -> String {
    let state = match cell {
        Cell::Empty => "empty",
        Cell::Occupied(Mark::X) => "marked with X",
        Cell::Occupied(Mark::O) => "marked with O",
    };
    format!("Cell {}, {}", index + 1, state)
}

/// Labels for all nine cells, in index order.
pub fn board_labels(board: &Board) -> [String; CELL_COUNT] {
    std::array::from_fn(|i| cell_label(i, board.cells()[i]))
}
