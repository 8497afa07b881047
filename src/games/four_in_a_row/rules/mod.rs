//! Game rules for the 4x4 board.
//!
//! Pure functions for evaluating a board. Rules are kept apart from the
//! state machine so they can be tested and reused by the computer player.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_win};
