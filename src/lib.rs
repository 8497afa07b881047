//! Four in a Row - a 4x4 connect-the-line game served over HTTP
//!
//! A human (O) plays against a computer (X) that always takes the first
//! open cell. A coin flip decides who moves first.
//!
//! # Architecture
//!
//! - **Games**: the board, win/draw rules and the game state machine
//! - **Session**: the single server-side game behind a mutex
//! - **Server**: JSON API under `/api` and static files (axum)
//! - **Tui**: a line-based terminal client for a running server
//!
//! # Example
//!
//! ```
//! use four_in_a_row::{GameState, Marker, MoveOutcome};
//!
//! let mut game = GameState::started(Marker::O);
//! let outcome = game.submit_move(5).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continue { next: Marker::X });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod server;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Game types
pub use games::four_in_a_row::{
    Action, Applied, Board, ButtonLabel, CELL_COUNT, COMPUTER_MARKER, Cell, GameSnapshot,
    GameState, HUMAN_MARKER, LINES, LegacyPhase, Line, Marker, MoveOutcome, MoveRejection, Phase,
    SIDE, check_win, next_move,
};

// Crate-level exports - Rules
pub use games::four_in_a_row::rules::{is_draw, is_full};

// Crate-level exports - Server
pub use server::{MoveRequest, router, run_server};
pub use session::SharedGame;

// Crate-level exports - Terminal client
pub use tui::{App, ClientError, Command, GameApi, GameClient, SimpleAI, render, run_tui};
