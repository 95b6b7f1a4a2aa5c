//! Axum router for the REST API.

use crate::dto::{GameResponse, MoveRequest, MoveResponse};
use crate::error::ApiError;
use crate::service::GameService;
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tracing::{info, instrument, warn};

/// Builds the `/api` router around `service`.
#[instrument(skip(service))]
pub fn router(service: GameService) -> Router {
    Router::new()
        .route("/api/games", post(create_game))
        .route("/api/games/{id}", get(get_game))
        .route("/api/games/{id}/moves", post(make_move))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(service)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn create_game(State(service): State<GameService>) -> Json<GameResponse> {
    Json(service.create_game())
}

async fn get_game(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    service.get_game(&id).map(Json)
}

async fn make_move(
    State(service): State<GameService>,
    Path(id): Path<String>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        warn!(game_id = %id, error = %rejection.body_text(), "Rejected move body");
        ApiError::BadRequest
    })?;
    service.make_move(&id, request.position).map(Json)
}
