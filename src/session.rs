//! The single game held by the server.
//!
//! Every request locks the game for the whole read-evaluate-mutate-respond
//! sequence, so requests are applied one at a time.

use crate::games::four_in_a_row::{Action, GameSnapshot, GameState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

#[derive(Debug)]
struct Table {
    state: GameState,
    rng: StdRng,
}

/// Shared handle to the server's game.
#[derive(Debug, Clone)]
pub struct SharedGame {
    table: Arc<Mutex<Table>>,
    computer_moves: bool,
}

impl SharedGame {
    /// Creates a fresh game seeded from the OS.
    ///
    /// With `computer_moves` set, the computer's turn is played on the
    /// server right after the request that handed it the move.
    #[instrument]
    pub fn new(computer_moves: bool) -> Self {
        Self::with_rng(StdRng::from_os_rng(), computer_moves)
    }

    /// Creates a fresh game using the given random source.
    #[instrument(skip(rng))]
    pub fn with_rng(rng: StdRng, computer_moves: bool) -> Self {
        info!(computer_moves, "Creating shared game");
        Self {
            table: Arc::new(Mutex::new(Table {
                state: GameState::new(),
                rng,
            })),
            computer_moves,
        }
    }

    /// Whether the server plays the computer's turns.
    pub fn computer_moves(&self) -> bool {
        self.computer_moves
    }

    // A panic while holding the lock cannot leave a half-applied move:
    // transitions only mutate after every check has passed.
    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current snapshot.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.lock().state)
    }

    /// Resets the game.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameSnapshot {
        self.dispatch(Action::Reset)
    }

    /// Flips the coin and starts a new game.
    #[instrument(skip(self))]
    pub fn flip_coin(&self) -> GameSnapshot {
        self.dispatch(Action::FlipCoin)
    }

    /// Submits a move; invalid moves leave the game unchanged.
    #[instrument(skip(self))]
    pub fn submit_move(&self, index: usize) -> GameSnapshot {
        self.dispatch(Action::Move(index))
    }

    fn dispatch(&self, action: Action) -> GameSnapshot {
        let mut guard = self.lock();
        let table = &mut *guard;

        let state = std::mem::take(&mut table.state);
        let (state, result) = state.apply(action, &mut table.rng);
        table.state = state;

        match result {
            Ok(applied) => debug!(?applied, "Action applied"),
            Err(rejection) => debug!(%rejection, "Action ignored"),
        }

        if self.computer_moves
            && let Some((index, outcome)) = table.state.play_computer_turn()
        {
            info!(index, ?outcome, "Computer moved");
        }

        GameSnapshot::from(&table.state)
    }
}
