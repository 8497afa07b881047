//! Simple AI that picks the first open cell.

use super::{Board, Marker};
use tracing::instrument;

/// Returns the lowest-numbered empty cell, or `None` on a full board.
///
/// The player is ignored: no blocking, no lookahead.
#[instrument(skip(board), ret)]
pub fn next_move(board: &Board, _player: Marker) -> Option<usize> {
    board.cells().iter().position(|&cell| cell == super::Cell::Empty)
}
