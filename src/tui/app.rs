//! Application state and logic.

use super::input::Command;
use super::rest_client::{ClientError, GameApi};
use super::simple_ai::SimpleAI;
use crate::games::four_in_a_row::{ButtonLabel, GameSnapshot};
use tracing::{debug, info, instrument};

/// Client-side game: the last snapshot plus the computer player.
pub struct App<A> {
    api: A,
    ai: SimpleAI,
    snapshot: GameSnapshot,
    message: Option<String>,
}

impl<A: GameApi> App<A> {
    /// Loads the server's current state.
    #[instrument(skip_all)]
    pub async fn connect(api: A, ai: SimpleAI) -> Result<Self, ClientError> {
        let snapshot = api.state().await?;
        info!(phase = %snapshot.phase, "Initial state loaded");
        Ok(Self {
            api,
            ai,
            snapshot,
            message: None,
        })
    }

    /// Last snapshot received from the server.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Feedback from the last command, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runs a command. Quit and help are handled by the caller.
    #[instrument(skip(self))]
    pub async fn handle(&mut self, command: Command) -> Result<(), ClientError> {
        self.message = None;
        match command {
            Command::Button => self.press_button().await,
            Command::Cell(index) => self.click_cell(index).await,
            Command::Help | Command::Quit => Ok(()),
        }
    }

    /// Flip, Start or Clear, depending on the label.
    #[instrument(skip(self), fields(label = %self.snapshot.button_label()))]
    pub async fn press_button(&mut self) -> Result<(), ClientError> {
        match self.snapshot.button_label() {
            ButtonLabel::Flip => {
                self.snapshot = self.api.flip().await?;
                if let Some(starting) = self.snapshot.starting_player {
                    self.message = Some(format!("Coin flipped! {} starts.", starting));
                }
                Ok(())
            }
            ButtonLabel::Start => {
                if self.snapshot.is_computer_turn() {
                    self.computer_move().await
                } else {
                    self.message = Some("It's your turn.".to_string());
                    Ok(())
                }
            }
            ButtonLabel::Clear => {
                self.snapshot = self.api.reset().await?;
                self.follow_up().await
            }
        }
    }

    /// Plays a cell for the human, then lets the computer answer.
    #[instrument(skip(self))]
    pub async fn click_cell(&mut self, index: usize) -> Result<(), ClientError> {
        let open = self.snapshot.board.is_empty(index);
        if self.snapshot.locked || !open || !self.snapshot.is_human_turn() {
            debug!(open, "Click ignored");
            self.message = Some(format!("Can't play cell {} now.", index));
            return Ok(());
        }

        self.snapshot = self.api.submit_move(index).await?;
        self.follow_up().await
    }

    /// Gives the computer its move after the cosmetic pause, if it is its turn.
    #[instrument(skip(self))]
    pub async fn follow_up(&mut self) -> Result<(), ClientError> {
        if self.snapshot.is_computer_turn() {
            self.ai.think().await;
            self.computer_move().await?;
        }
        Ok(())
    }

    async fn computer_move(&mut self) -> Result<(), ClientError> {
        let Some(index) = self.ai.pick_move(&self.snapshot) else {
            return Ok(());
        };
        self.snapshot = self.api.submit_move(index).await?;
        self.message = Some(format!("Computer played {}.", index));
        Ok(())
    }
}
