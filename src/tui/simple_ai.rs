//! Computer player driven from the client.

use crate::games::four_in_a_row::{COMPUTER_MARKER, GameSnapshot, next_move};
use std::time::Duration;
use tracing::debug;

/// Simple AI that picks the first available cell after a short pause.
#[derive(Debug, Clone)]
pub struct SimpleAI {
    delay: Duration,
}

impl SimpleAI {
    /// Creates an AI that waits `delay` before a move it is not told to rush.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Cosmetic pause before moving.
    pub async fn think(&self) {
        tokio::time::sleep(self.delay).await;
    }

    /// Cell the computer plays, if any.
    pub fn pick_move(&self, snapshot: &GameSnapshot) -> Option<usize> {
        let marker = snapshot.computer_marker.unwrap_or(COMPUTER_MARKER);
        let index = next_move(&snapshot.board, marker);
        debug!(?index, "AI chose cell");
        index
    }
}
