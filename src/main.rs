use std::sync::Arc;

use outpost::config::Config;
use outpost::server::listener;
use outpost::server::registry::ConnectionRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Arc::new(Config::load()?);
    tracing::info!("Serving files from {}", cfg.files_dir.display());

    let registry = ConnectionRegistry::new();

    tokio::select! {
        res = listener::run(cfg, registry.clone()) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
