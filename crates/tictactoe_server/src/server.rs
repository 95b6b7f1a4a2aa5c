//! Serving the REST API on a TCP listener.

use crate::routes::router;
use crate::service::GameService;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Serves the API on `listener` until `shutdown` resolves.
///
/// The games live in `service`'s store, so they last exactly as long as
/// this call.
#[instrument(skip_all)]
pub async fn serve<F>(listener: TcpListener, service: GameService, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Server ready at http://{}/api/games", addr);

    axum::serve(listener, router(service.clone()))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!(games = service.store().len(), "Server stopped");
    Ok(())
}
