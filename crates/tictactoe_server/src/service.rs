//! Game operations behind the REST endpoints.

use crate::dto::{GameResponse, MoveResponse};
use crate::error::{ApiError, POSITION_RANGE_MESSAGE};
use crate::store::{GameId, GameStore};
use derive_new::new;
use tictactoe_engine::Position;
use tracing::{debug, info, instrument};

/// Creates games, reads them and applies moves against a [`GameStore`].
#[derive(Debug, Clone, Default, new)]
pub struct GameService {
    store: GameStore,
}

impl GameService {
    /// Returns the backing store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Creates a new game.
    #[instrument(skip(self))]
    pub fn create_game(&self) -> GameResponse {
        let (id, game) = self.store.create();
        GameResponse::from_game(id, &game)
    }

    /// Reads the game with the given identifier.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the id is unknown or not a valid UUID.
    #[instrument(skip(self))]
    pub fn get_game(&self, id: &str) -> Result<GameResponse, ApiError> {
        let id = parse_id(id)?;
        let game = self.store.get(&id).ok_or(ApiError::NotFound)?;
        Ok(GameResponse::from_game(id, &game))
    }

    /// Plays the current player's mark at `position` (0-8).
    ///
    /// Validation order: game exists, game not finished, position in range,
    /// cell empty. The whole check-and-apply runs under the store lock.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`], [`ApiError::GameFinished`] or
    /// [`ApiError::InvalidMove`].
    #[instrument(skip(self))]
    pub fn make_move(&self, id: &str, position: i64) -> Result<MoveResponse, ApiError> {
        let id = parse_id(id)?;
        let response = self
            .store
            .with_game(&id, |game| {
                if game.status().is_terminal() {
                    return Err(ApiError::GameFinished);
                }
                let pos = usize::try_from(position)
                    .ok()
                    .and_then(Position::from_index)
                    .ok_or_else(|| ApiError::invalid_move(POSITION_RANGE_MESSAGE))?;
                let mv = game.play_at(pos)?;
                Ok(MoveResponse {
                    game: GameResponse::from_game(id, game),
                    last_move: mv.into(),
                })
            })
            .ok_or(ApiError::NotFound)??;

        info!(
            game_id = %id,
            position,
            status = %response.game.status,
            "Move applied"
        );
        Ok(response)
    }
}

fn parse_id(id: &str) -> Result<GameId, ApiError> {
    id.parse().map_err(|err| {
        debug!(id, error = %err, "Malformed game id");
        ApiError::NotFound
    })
}
