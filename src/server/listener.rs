use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::registry::ConnectionRegistry;

/// Binds the configured address and serves connections forever.
pub async fn run(cfg: Arc<Config>, registry: ConnectionRegistry) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, cfg, registry).await
}

/// Accept loop over an already-bound listener.
///
/// Sequential and unbounded: accept, hand the socket to a fresh
/// fire-and-forget connection task through the registry, accept again.
/// No backpressure, no connection limit, no idle timeout.
pub async fn serve(
    listener: TcpListener,
    cfg: Arc<Config>,
    registry: ConnectionRegistry,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let cfg = Arc::clone(&cfg);
        registry.spawn(async move {
            let mut conn = Connection::new(socket, cfg);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
