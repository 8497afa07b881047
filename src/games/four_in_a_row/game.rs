//! Game state machine.
//!
//! `AwaitingCoinFlip -> InProgress -> Finished`, with reset returning to
//! `AwaitingCoinFlip` from anywhere. The state is a plain value owned by the
//! caller; nothing here is global.

use super::action::{Action, Applied, MoveOutcome, MoveRejection};
use super::phases::Phase;
use super::rules::{Line, check_win, is_draw};
use super::simple_ai::next_move;
use super::types::{Board, CELL_COUNT, Cell, Marker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Marker always given to the human player.
pub const HUMAN_MARKER: Marker = Marker::O;

/// Marker always given to the computer player.
pub const COMPUTER_MARKER: Marker = Marker::X;

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    phase: Phase,
    starting_player: Option<Marker>,
    human_marker: Option<Marker>,
    computer_marker: Option<Marker>,
    current_player: Option<Marker>,
    locked: bool,
    winning_line: Option<Line>,
}

impl GameState {
    /// Creates an empty game waiting for the coin flip.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingCoinFlip,
            starting_player: None,
            human_marker: None,
            computer_marker: None,
            current_player: None,
            locked: false,
            winning_line: None,
        }
    }

    /// Creates a fresh game already in progress with `starting` to move.
    ///
    /// This is what a coin flip produces; exposed for deterministic callers.
    pub fn started(starting: Marker) -> Self {
        Self {
            starting_player: Some(starting),
            human_marker: Some(HUMAN_MARKER),
            computer_marker: Some(COMPUTER_MARKER),
            current_player: Some(starting),
            phase: Phase::InProgress,
            ..Self::new()
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Marker chosen by the coin flip.
    pub fn starting_player(&self) -> Option<Marker> {
        self.starting_player
    }

    /// Marker of the human player.
    pub fn human_marker(&self) -> Option<Marker> {
        self.human_marker
    }

    /// Marker of the computer player.
    pub fn computer_marker(&self) -> Option<Marker> {
        self.computer_marker
    }

    /// Marker whose turn it is.
    pub fn current_player(&self) -> Option<Marker> {
        self.current_player
    }

    /// True once the game has ended.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Line completed by the winner, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// True when the game is running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        !self.locked
            && self.phase == Phase::InProgress
            && self.current_player.is_some()
            && self.current_player == self.computer_marker
    }

    /// Clears everything back to the coin-flip phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Flips a fair coin for the starting marker and begins a new game.
    ///
    /// Works from any phase; the board is always replaced. The human keeps
    /// [`HUMAN_MARKER`] regardless of the result.
    #[instrument(skip(self, rng), fields(phase = %self.phase))]
    pub fn flip_coin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Marker {
        let starting = if rng.random_bool(0.5) {
            Marker::O
        } else {
            Marker::X
        };
        *self = Self::started(starting);
        info!(starting = %starting, "Coin flipped");
        starting
    }

    /// Places the current player's marker at `index`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveRejection`] and leaves the state untouched when the
    /// game is locked, has not started, or the cell is out of range or taken.
    #[instrument(skip(self), fields(phase = %self.phase, player = ?self.current_player))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveOutcome, MoveRejection> {
        if self.locked {
            debug!("Move on locked game ignored");
            return Err(MoveRejection::Locked);
        }
        if index >= CELL_COUNT {
            debug!("Move out of range ignored");
            return Err(MoveRejection::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            debug!("Move on occupied cell ignored");
            return Err(MoveRejection::Occupied(index));
        }
        let Some(current) = self.current_player else {
            debug!("Move before coin flip ignored");
            return Err(MoveRejection::NotStarted);
        };

        self.board
            .set(index, Cell::Occupied(current))
            .map_err(|_| MoveRejection::OutOfRange(index))?;

        let outcome = if let Some(line) = check_win(&self.board, current) {
            self.locked = true;
            self.winning_line = Some(line);
            self.phase = Phase::Finished;
            MoveOutcome::Won {
                winner: current,
                line,
            }
        } else if is_draw(&self.board) {
            self.locked = true;
            self.phase = Phase::Finished;
            MoveOutcome::Draw
        } else {
            let next = if Some(current) == self.human_marker {
                self.computer_marker
            } else {
                self.human_marker
            };
            self.current_player = next;
            MoveOutcome::Continue {
                next: next.unwrap_or_else(|| current.opponent()),
            }
        };

        info!(?outcome, "Move applied");
        Ok(outcome)
    }

    /// Plays the computer's turn with the first-open-cell strategy.
    ///
    /// Returns `None` when it is not the computer's turn.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Option<(usize, MoveOutcome)> {
        if !self.is_computer_turn() {
            return None;
        }
        let marker = self.computer_marker?;
        let index = next_move(&self.board, marker)?;
        self.submit_move(index).ok().map(|outcome| (index, outcome))
    }

    /// Applies an action as a pure transition from the old state to the new.
    ///
    /// On rejection the returned state equals the input.
    #[instrument(skip(self, rng))]
    pub fn apply<R: Rng + ?Sized>(
        mut self,
        action: Action,
        rng: &mut R,
    ) -> (Self, Result<Applied, MoveRejection>) {
        let result = match action {
            Action::Reset => {
                self.reset();
                Ok(Applied::Reset)
            }
            Action::FlipCoin => {
                let starting = self.flip_coin(rng);
                Ok(Applied::CoinFlipped { starting })
            }
            Action::Move(index) => {
                let marker = self.current_player;
                self.submit_move(index).map(|outcome| Applied::Moved {
                    index,
                    marker: marker.unwrap_or(COMPUTER_MARKER),
                    outcome,
                })
            }
        };
        (self, result)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
