//! Game phases.

use serde::{Deserialize, Serialize};

/// Which operations are meaningful right now.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Board is empty; waiting for the coin flip that picks who starts.
    #[default]
    AwaitingCoinFlip,
    /// Players are taking turns.
    InProgress,
    /// Somebody won or the board filled up.
    Finished,
}
