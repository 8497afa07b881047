//! Command-line interface for four_in_a_row.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Four in a Row - 4x4 connect-the-line game over HTTP
#[derive(Parser, Debug)]
#[command(name = "four_in_a_row")]
#[command(about = "4x4 connect-the-line game against a first-open-cell computer")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to the TOML config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "four_in_a_row.toml")]
        config: PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of static files served outside /api (overrides config)
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Play the computer's turns on the server
        #[arg(long)]
        computer_moves: bool,
    },

    /// Play in the terminal against a running server
    Play {
        /// Game server URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server_url: String,

        /// Pause before the computer moves, in milliseconds
        #[arg(long, default_value = "500")]
        delay_ms: u64,
    },
}
