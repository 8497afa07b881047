//! First-class action types.
//!
//! Every transition of the state machine is described by an [`Action`], and
//! its effect by either an [`Applied`] value or a [`MoveRejection`].

use super::{Line, Marker};
use serde::{Deserialize, Serialize};

/// Something a caller asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Start over with an empty board.
    Reset,
    /// Pick the starting marker at random and begin a game.
    FlipCoin,
    /// Place the current player's marker on a cell.
    Move(usize),
}

/// What happened after a move was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues; `next` is now to move.
    Continue {
        /// Marker whose turn it is now.
        next: Marker,
    },
    /// The mover completed a line.
    Won {
        /// Winning marker.
        winner: Marker,
        /// Completed line.
        line: Line,
    },
    /// Board filled with no line completed.
    Draw,
}

/// An action that changed the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Applied {
    /// Board cleared.
    Reset,
    /// New game begun.
    CoinFlipped {
        /// Marker that moves first.
        starting: Marker,
    },
    /// A marker was placed.
    Moved {
        /// Cell played.
        index: usize,
        /// Marker placed there.
        marker: Marker,
        /// Resulting game status.
        outcome: MoveOutcome,
    },
}

/// Why a move was ignored. The game is never modified when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveRejection {
    /// Game already ended.
    #[display("Game is over; reset to play again")]
    Locked,

    /// No coin flip yet, so nobody is to move.
    #[display("Game has not started; flip the coin first")]
    NotStarted,

    /// Index does not name a cell.
    #[display("Cell {} is out of range (must be 0-15)", _0)]
    OutOfRange(usize),

    /// Cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for MoveRejection {}
