//! HTTP transport: JSON API under `/api` plus static files.

use crate::config::ServerConfig;
use crate::games::four_in_a_row::GameSnapshot;
use crate::session::SharedGame;
use anyhow::Result;
use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::Request,
    response::Response,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tracing::{debug, info, instrument};

/// Body of `POST /api/move`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Cell to play (0-15). Anything else is ignored.
    #[serde(default)]
    pub index: Option<serde_json::Value>,
}

impl MoveRequest {
    /// Parses a raw request body; anything that is not a JSON object yields
    /// an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The requested cell, if `index` is a non-negative integer.
    pub fn cell(&self) -> Option<usize> {
        self.index
            .as_ref()
            .and_then(serde_json::Value::as_u64)
            .and_then(|index| usize::try_from(index).ok())
    }
}

/// Builds the application router around a shared game.
#[instrument(skip(game, static_dir), fields(static_dir = %static_dir.display()))]
pub fn router(game: SharedGame, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/state", get(get_state))
        .route("/reset", post(reset))
        .route("/flip", post(flip_coin))
        .route("/move", post(submit_move));

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .map_request(|req: Request<Body>| {
                    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
                    req
                })
                .map_response(|resp: Response| {
                    debug!(status = ?resp.status(), "Response sent");
                    resp
                }),
        )
        .with_state(game)
}

/// Binds the configured address and serves until Ctrl+C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let game = SharedGame::new(*config.computer_moves());
    let app = router(game, config.static_dir());

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Server ready at http://{}:{}/",
        config.host(),
        config.port()
    );
    info!(static_dir = %config.static_dir().display(), "Serving static files");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[instrument(skip(game))]
async fn get_state(State(game): State<SharedGame>) -> Json<GameSnapshot> {
    Json(game.snapshot())
}

#[instrument(skip(game))]
async fn reset(State(game): State<SharedGame>) -> Json<GameSnapshot> {
    Json(game.reset())
}

#[instrument(skip(game))]
async fn flip_coin(State(game): State<SharedGame>) -> Json<GameSnapshot> {
    Json(game.flip_coin())
}

#[instrument(skip(game, body))]
async fn submit_move(State(game): State<SharedGame>, body: Bytes) -> Json<GameSnapshot> {
    let request = MoveRequest::from_body(&body);
    match request.cell() {
        Some(index) => Json(game.submit_move(index)),
        None => {
            debug!(index = ?request.index, "Malformed move ignored");
            Json(game.snapshot())
        }
    }
}
