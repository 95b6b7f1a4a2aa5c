//! Playing against a live HTTP server through the REST client.

use axum::Json;
use axum::http::StatusCode;
use axum::routing::{get, post};
use std::io::Cursor;
use tictactoe::{GameBackend, GameConsole, MoveOutcome, RestGameClient};
use tictactoe_engine::{Game, GameStatus, Player};
use tictactoe_server::{
    GameId, GameResponse, GameService, GameStore, OCCUPIED_MESSAGE, POSITION_RANGE_MESSAGE,
    StatusTag, serve,
};
use tokio::net::TcpListener;

/// Starts a server on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Bound address");
    let service = GameService::new(GameStore::new());
    tokio::spawn(serve(listener, service, std::future::pending()));
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_create_binds_to_new_game() {
    let base_url = spawn_server().await;
    let client = RestGameClient::create(&base_url).await.expect("Create failed");

    let game = client.fetch().await.expect("Fetch failed");
    assert_eq!(game.game_id.to_string(), client.game_id());
    assert_eq!(game.status, StatusTag::InProgress);
    assert_eq!(game.current_player, Player::X);
    assert!(game.board.iter().all(String::is_empty));
}

#[tokio::test]
async fn test_trailing_slash_is_accepted() {
    let base_url = spawn_server().await;
    let client = RestGameClient::create(format!("{}/", base_url))
        .await
        .expect("Create failed");
    client.fetch().await.expect("Fetch failed");
}

#[tokio::test]
async fn test_remote_moves_and_refusals() {
    let base_url = spawn_server().await;
    let mut client = RestGameClient::create(&base_url).await.expect("Create failed");

    assert_eq!(
        client.play(1, 1).await.expect("Move failed"),
        MoveOutcome::Placed(Player::X)
    );
    assert_eq!(
        client.play(1, 1).await.expect("Move failed"),
        MoveOutcome::Rejected(OCCUPIED_MESSAGE.to_string())
    );

    let refused = client
        .play_position(9)
        .await
        .expect("Request failed")
        .expect_err("Position 9 is off the board");
    assert_eq!(refused.error, POSITION_RANGE_MESSAGE);

    let view = client.view().await.expect("View failed");
    assert_eq!(view.moves_made, 1);
    assert_eq!(view.current_player, Player::O);
}

#[tokio::test]
async fn test_finished_game_refuses_moves() {
    let base_url = spawn_server().await;
    let mut client = RestGameClient::create(&base_url).await.expect("Create failed");

    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        client.play(row, col).await.expect("Move failed");
    }
    assert_eq!(client.view().await.expect("View failed").status, GameStatus::XWon);

    assert_eq!(
        client.play(2, 2).await.expect("Move failed"),
        MoveOutcome::Rejected("Game already finished.".to_string())
    );
}

#[tokio::test]
async fn test_new_game_rebinds() {
    let base_url = spawn_server().await;
    let mut client = RestGameClient::create(&base_url).await.expect("Create failed");
    client.play(0, 0).await.expect("Move failed");
    let first = client.game_id().to_string();

    client.new_game().await.expect("New game failed");
    assert_ne!(client.game_id(), first);
    assert_eq!(client.view().await.expect("View failed").moves_made, 0);
}

#[tokio::test]
async fn test_move_body_on_the_wire() {
    let base_url = spawn_server().await;
    let client = RestGameClient::create(&base_url).await.expect("Create failed");

    let body = client
        .play_position(4)
        .await
        .expect("Request failed")
        .expect("Move accepted");
    let json = serde_json::to_value(&body).expect("Serializable");
    assert_eq!(json["board"][4], "X");
    assert_eq!(json["currentPlayer"], "O");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["lastMove"]["player"], "X");
    assert_eq!(json["lastMove"]["position"], 4);
}

#[tokio::test]
async fn test_console_over_remote_backend() {
    let base_url = spawn_server().await;
    let client = RestGameClient::create(&base_url).await.expect("Create failed");

    let script = "2,0\n2,0\n0,0\n2,1\n1,1\n2,2\n\nn\n";
    let mut console = GameConsole::new(client, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    console.run().await.expect("Console run failed");

    let (client, _, out) = console.into_parts();
    let out = String::from_utf8(out).expect("Output is UTF-8");
    assert!(out.contains(OCCUPIED_MESSAGE));
    assert!(out.contains("🎉 Player X Wins! 🎉"));
    assert!(out.ends_with("Thanks for playing! 👋\n"));

    let game = client.fetch().await.expect("Fetch failed");
    assert_eq!(game.status, StatusTag::XWins);
}

#[tokio::test]
async fn test_fetch_reports_status_of_non_json_error() {
    // Creates games normally but answers reads with an HTML gateway page
    let app = axum::Router::new()
        .route(
            "/api/games",
            post(|| async { Json(GameResponse::from_game(GameId::new(), &Game::new())) }),
        )
        .route(
            "/api/games/{id}",
            get(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
        );
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Bound address");
    tokio::spawn(async move { axum::serve(listener, app).await });

    let client = RestGameClient::create(format!("http://{}", addr))
        .await
        .expect("Create failed");
    let err = client.fetch().await.expect_err("Gateway error");
    let message = err.to_string();
    assert!(message.contains("502"), "{message}");
    assert!(message.contains("upstream down"), "{message}");
}
