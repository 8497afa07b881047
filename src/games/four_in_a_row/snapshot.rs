//! Wire format of the game state.
//!
//! The snapshot is a flat JSON object. Field names follow the browser
//! client's vocabulary: `player`/`comp` are the human and computer markers,
//! `disable` is the lock flag and `winnerCombo` the winning line.

use super::{Board, GameState, Line, Marker, Phase};
use serde::{Deserialize, Serialize};

/// Coarse phase label understood by the browser client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyPhase {
    /// Waiting for the coin flip.
    Flip,
    /// Game started (running or finished).
    Start,
}

impl From<Phase> for LegacyPhase {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::AwaitingCoinFlip => LegacyPhase::Flip,
            Phase::InProgress | Phase::Finished => LegacyPhase::Start,
        }
    }
}

/// Label of the single Flip/Start/Clear button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ButtonLabel {
    /// Flip the coin to start a game.
    Flip,
    /// Let the computer move if it is its turn.
    Start,
    /// Clear a finished game.
    Clear,
}

/// Full game state as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// All 16 cells.
    pub board: Board,
    /// Exact phase.
    pub phase: Phase,
    /// Coarse phase for the browser client.
    pub game_state: LegacyPhase,
    /// Marker that moved first.
    pub starting_player: Option<Marker>,
    /// Human marker.
    #[serde(rename = "player")]
    pub human_marker: Option<Marker>,
    /// Computer marker.
    #[serde(rename = "comp")]
    pub computer_marker: Option<Marker>,
    /// Marker to move.
    pub current_player: Option<Marker>,
    /// Game over; moves are ignored.
    #[serde(rename = "disable")]
    pub locked: bool,
    /// Completed line, if someone won.
    #[serde(rename = "winnerCombo")]
    pub winning_line: Option<Line>,
}

impl GameSnapshot {
    /// Label the Flip/Start/Clear button should show.
    pub fn button_label(&self) -> ButtonLabel {
        if self.phase == Phase::AwaitingCoinFlip {
            ButtonLabel::Flip
        } else if self.locked {
            ButtonLabel::Clear
        } else {
            ButtonLabel::Start
        }
    }

    /// True when the game is running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        !self.locked && self.current_player.is_some() && self.current_player == self.computer_marker
    }

    /// True when the game is running and the human is to move.
    pub fn is_human_turn(&self) -> bool {
        !self.locked && self.current_player.is_some() && self.current_player == self.human_marker
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            phase: state.phase(),
            game_state: state.phase().into(),
            starting_player: state.starting_player(),
            human_marker: state.human_marker(),
            computer_marker: state.computer_marker(),
            current_player: state.current_player(),
            locked: state.locked(),
            winning_line: state.winning_line(),
        }
    }
}
