//! Pokebat Battle Server
//!
//! Serves one shared battle session over TCP. Each connection speaks
//! newline-delimited JSON-RPC 2.0 and is handled on its own task.

use std::sync::Arc;

use anyhow::{Context, Result};
use pokebat::catalog::InMemoryCatalog;
use pokebat::config::ServerConfig;
use pokebat::rpc::{serve_connection, RpcHandler};
use pokebat::session::BattleSession;
use pokebat::telemetry::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    let catalog = InMemoryCatalog::load(&config.catalog_path).with_context(|| {
        format!(
            "failed to load creature catalog from {}",
            config.catalog_path.display()
        )
    })?;
    tracing::info!(
        creatures = catalog.len(),
        path = %config.catalog_path.display(),
        "catalog loaded"
    );

    let session = Arc::new(BattleSession::from_config(&config, Arc::new(catalog)));
    let handler = Arc::new(RpcHandler::new(session));

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, policy = ?config.roster_policy, "battle server listening");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to accept connection");
                        continue;
                    }
                };
                tracing::debug!(%peer, "client connected");

                let handler = Arc::clone(&handler);
                tokio::spawn(async move {
                    if let Err(err) = serve_connection(handler, stream).await {
                        tracing::warn!(%peer, error = %err, "connection closed with error");
                    } else {
                        tracing::debug!(%peer, "client disconnected");
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
