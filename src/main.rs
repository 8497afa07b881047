//! Four in a Row - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use four_in_a_row::{ServerConfig, run_server, run_tui};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            static_dir,
            computer_moves,
        } => serve(config, host, port, static_dir, computer_moves).await,
        Command::Play {
            server_url,
            delay_ms,
        } => run_tui(server_url, Duration::from_millis(delay_ms)).await,
    }
}

/// Run the HTTP game server
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn serve(
    config_path: PathBuf,
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    computer_moves: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Four in a Row server");

    let config = ServerConfig::load_or_default(&config_path)?.with_overrides(
        host,
        port,
        static_dir,
        computer_moves,
    );

    run_server(config).await
}
