//! Win detection across the ten fixed lines.

use super::super::{Board, Cell, Marker};
use tracing::instrument;

/// Four cell indices forming a line.
pub type Line = [usize; 4];

/// Every winning line, in evaluation order.
pub const LINES: [Line; 10] = [
    // Rows
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    // Columns
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    // Diagonals
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// Returns the first line completely held by `player`.
///
/// Lines are checked in [`LINES`] order, so when several lines are complete
/// at once the earliest one wins.
#[instrument(skip(board), ret)]
pub fn check_win(board: &Board, player: Marker) -> Option<Line> {
    LINES.iter().copied().find(|line| {
        line.iter()
            .all(|&i| board.get(i) == Some(Cell::Occupied(player)))
    })
}
