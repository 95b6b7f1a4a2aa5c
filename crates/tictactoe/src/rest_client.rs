//! HTTP client for the tic-tac-toe REST API.

use crate::backend::{GameBackend, GameView, MoveOutcome};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::StatusCode;
use tictactoe_server::{ErrorResponse, GameResponse, MoveRequest, MoveResponse};
use tracing::{debug, info, instrument, warn};

/// Client bound to one game on a remote server.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
    game_id: String,
}

impl RestGameClient {
    /// Creates a new game on the server at `base_url` and binds to it.
    #[instrument(skip_all, fields(base_url = tracing::field::Empty))]
    pub async fn create(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::Span::current().record("base_url", base_url.as_str());

        let client = reqwest::Client::new();
        let game = Self::post_game(&client, &base_url).await?;
        info!(game_id = %game.game_id, "Created remote game");

        Ok(Self {
            base_url,
            client,
            game_id: game.game_id.to_string(),
        })
    }

    /// Identifier of the bound game.
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    async fn post_game(client: &reqwest::Client, base_url: &str) -> Result<GameResponse> {
        let url = format!("{}/api/games", base_url);
        let response = client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetches the bound game.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub async fn fetch(&self) -> Result<GameResponse> {
        let url = format!("{}/api/games/{}", self.base_url, self.game_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // Body may not be our JSON (proxies, gateways)
            let body = response.text().await.unwrap_or_default();
            bail!("Server returned {}: {}", status, body);
        }
        Ok(response.json().await?)
    }

    /// Posts a move at `position` (0-8).
    ///
    /// Moves the server refuses (400/422) come back as `Ok(Err(_))`.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub async fn play_position(
        &self,
        position: usize,
    ) -> Result<Result<MoveResponse, ErrorResponse>> {
        let url = format!("{}/api/games/{}/moves", self.base_url, self.game_id);
        let request = MoveRequest::new(i64::try_from(position)?);
        let response = self.client.post(&url).json(&request).send().await?;

        match response.status() {
            status if status.is_success() => {
                let body: MoveResponse = response.json().await?;
                debug!(status = %body.game.status, "Move accepted");
                Ok(Ok(body))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let body: ErrorResponse = response.json().await?;
                warn!(error = %body.error, "Move refused");
                Ok(Err(body))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                bail!("Server returned {}: {}", status, body)
            }
        }
    }
}

#[async_trait]
impl GameBackend for RestGameClient {
    async fn view(&self) -> Result<GameView> {
        let response = self.fetch().await?;
        Ok(GameView::try_from(&response)?)
    }

    async fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome> {
        match self.play_position(row * 3 + col).await? {
            Ok(body) => Ok(MoveOutcome::Placed(body.last_move.player)),
            Err(body) => Ok(MoveOutcome::Rejected(body.error)),
        }
    }

    #[instrument(skip(self), fields(old_game_id = %self.game_id))]
    async fn new_game(&mut self) -> Result<()> {
        let game = Self::post_game(&self.client, &self.base_url).await?;
        info!(game_id = %game.game_id, "Started new remote game");
        self.game_id = game.game_id.to_string();
        Ok(())
    }
}
