//! Tic-tac-toe REST API.
//!
//! - **Store**: [`GameStore`] keeps every game in memory, keyed by [`GameId`]
//! - **Service**: [`GameService`] validates and applies requests
//! - **Routes**: [`router`] exposes the service over axum
//!
//! | Method | Path                     | Success                |
//! |--------|--------------------------|------------------------|
//! | POST   | `/api/games`             | [`GameResponse`]       |
//! | GET    | `/api/games/{id}`        | [`GameResponse`]       |
//! | POST   | `/api/games/{id}/moves`  | [`MoveResponse`]       |
//!
//! Failures return an [`ErrorResponse`] with 404, 400 or 422
//! (see [`ApiError`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod dto;
mod error;
mod routes;
mod server;
mod service;
mod store;

pub use config::{ConfigError, ServerConfig};
pub use dto::{
    ErrorResponse, GameResponse, LastMove, MoveRequest, MoveResponse, StatusTag, UnknownMark,
    cell_to_mark, mark_to_cell,
};
pub use error::{ApiError, OCCUPIED_MESSAGE, POSITION_RANGE_MESSAGE};
pub use routes::router;
pub use server::serve;
pub use service::GameService;
pub use store::{GameId, GameStore};
