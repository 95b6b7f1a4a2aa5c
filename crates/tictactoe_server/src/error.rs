//! REST API error kinds and their HTTP mapping.

use crate::dto::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tictactoe_engine::MoveError;
use tracing::warn;

/// Message for a position outside 0-8.
pub const POSITION_RANGE_MESSAGE: &str = "Position must be between 0 and 8.";

/// Message for a move onto an occupied cell.
pub const OCCUPIED_MESSAGE: &str = "Invalid move: position already occupied";

/// Failure of an API operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ApiError {
    /// Unknown (or unparseable) game identifier.
    #[display("Game not found")]
    NotFound,

    /// Position out of range or cell already occupied.
    #[display("{reason}")]
    InvalidMove {
        /// Message returned to the client.
        reason: String,
    },

    /// Move attempted after the game reached a terminal status.
    #[display("Game already finished.")]
    GameFinished,

    /// Request body missing or malformed.
    #[display("Invalid input parameters")]
    BadRequest,
}

impl ApiError {
    /// Builds an [`ApiError::InvalidMove`].
    pub fn invalid_move(reason: impl Into<String>) -> Self {
        ApiError::InvalidMove {
            reason: reason.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidMove { .. } | ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::GameFinished => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::GameOver(_) => ApiError::GameFinished,
            MoveError::OutOfBounds { .. } => ApiError::invalid_move(POSITION_RANGE_MESSAGE),
            MoveError::CellOccupied(_) => ApiError::invalid_move(OCCUPIED_MESSAGE),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = %status, error = %self, "Request failed");
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
