//! HTTP client for the game's JSON API.

use crate::games::four_in_a_row::GameSnapshot;
use crate::server::MoveRequest;
use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

/// Error talking to the game server.
#[derive(Debug, Display, Error, From)]
pub enum ClientError {
    /// Transport or decoding failure.
    #[display("HTTP request failed: {}", _0)]
    Http(reqwest::Error),
}

/// The four operations the game server exposes.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    /// Fetches the current snapshot.
    async fn state(&self) -> Result<GameSnapshot, ClientError>;

    /// Resets the game.
    async fn reset(&self) -> Result<GameSnapshot, ClientError>;

    /// Flips the coin to start a game.
    async fn flip(&self) -> Result<GameSnapshot, ClientError>;

    /// Submits a move for whoever is to play.
    async fn submit_move(&self, index: usize) -> Result<GameSnapshot, ClientError>;
}

/// REST client for a remote game server.
#[derive(Debug, Clone)]
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    /// Creates a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn post(&self, path: &str) -> Result<GameSnapshot, ClientError> {
        let snapshot = self
            .client
            .post(self.url(path))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl GameApi for GameClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn state(&self) -> Result<GameSnapshot, ClientError> {
        let snapshot = self
            .client
            .get(self.url("state"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("Fetched state");
        Ok(snapshot)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn reset(&self) -> Result<GameSnapshot, ClientError> {
        self.post("reset").await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn flip(&self) -> Result<GameSnapshot, ClientError> {
        self.post("flip").await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn submit_move(&self, index: usize) -> Result<GameSnapshot, ClientError> {
        let body = MoveRequest {
            index: Some(serde_json::Value::from(index as i64)),
        };
        let snapshot = self
            .client
            .post(self.url("move"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(index, "Move submitted");
        Ok(snapshot)
    }
}
