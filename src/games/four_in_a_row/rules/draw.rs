//! Draw detection logic.

use super::super::{Board, Cell, Marker};
use super::win::check_win;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board on which neither marker holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_win(board, Marker::X).is_none() && check_win(board, Marker::O).is_none()
}
