//! Line-based terminal client for a running game server.

mod app;
mod input;
mod rest_client;
mod simple_ai;
mod ui;

pub use app::App;
pub use input::{Command, HELP, parse_command};
pub use rest_client::{ClientError, GameApi, GameClient};
pub use simple_ai::SimpleAI;
pub use ui::render;

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument};

/// Runs the terminal client until the player quits or stdin closes.
#[instrument(skip_all, fields(server_url = %server_url))]
pub async fn run_tui(server_url: String, delay: Duration) -> Result<()> {
    // Log to a file so tracing output doesn't interleave with the board
    let log_file = std::fs::File::create("four_in_a_row_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting terminal client");

    let mut app = App::connect(GameClient::new(server_url), SimpleAI::new(delay)).await?;
    app.follow_up().await?;

    println!("{}", HELP);
    print_state(&app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("{}", HELP),
            Some(command) => {
                app.handle(command).await?;
                print_state(&app);
            }
            None => println!("Unknown command. {}", HELP),
        }
    }

    info!("Terminal client exiting");
    Ok(())
}

fn print_state<A: GameApi>(app: &App<A>) {
    println!();
    println!("{}", render(app.snapshot()));
    if let Some(message) = app.message() {
        println!("{}", message);
    }
    print!("> ");
    let _ = std::io::stdout().flush();
}
