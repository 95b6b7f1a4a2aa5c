//! Tic Tac Toe - Unified CLI
//!
//! Plays in the terminal or serves games over HTTP.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe::cli::{Cli, Command};
use tictactoe::{GameConsole, LocalBackend, RestGameClient};
use tictactoe_server::{GameService, GameStore, ServerConfig, serve};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { server_url } => run_console(server_url).await,
        Command::Serve { config, host, port } => run_http_server(config, host, port).await,
    }
}

/// Play in this terminal, in-process or against a server
async fn run_console(server_url: Option<String>) -> Result<()> {
    // Logs go to stderr so they don't tear the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match server_url {
        Some(url) => {
            info!(server_url = %url, "Playing against remote server");
            let client = RestGameClient::create(url).await?;
            GameConsole::new(client, stdin.lock(), stdout).run().await
        }
        None => {
            GameConsole::new(LocalBackend::new(), stdin.lock(), stdout)
                .run()
                .await
        }
    }
}

/// Run the HTTP game server
#[instrument(skip_all)]
async fn run_http_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_server=debug")),
        )
        .init();

    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(&path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    info!(address = %config.address(), "Starting Tic Tac Toe HTTP server");

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))?;

    let service = GameService::new(GameStore::new());
    serve(listener, service, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
