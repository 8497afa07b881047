mod action;
mod game;
mod phases;
pub mod rules;
mod simple_ai;
mod snapshot;
mod types;

pub use action::{Action, Applied, MoveOutcome, MoveRejection};
pub use game::{COMPUTER_MARKER, GameState, HUMAN_MARKER};
pub use phases::Phase;
pub use rules::{LINES, Line, check_win};
pub use simple_ai::next_move;
pub use snapshot::{ButtonLabel, GameSnapshot, LegacyPhase};
pub use types::{Board, CELL_COUNT, Cell, Marker, SIDE};
