use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use account_service::modules::accounts::adapters::outbound::account_store_in_memory::InMemoryAccountStore;
use account_service::shell::config::AppConfig;
use account_service::shell::http::router;
use account_service::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    let store = if config.seed_accounts {
        InMemoryAccountStore::seeded()
    } else {
        InMemoryAccountStore::new()
    };
    let state = AppState::new(Arc::new(store));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, seeded = config.seed_accounts, "account service listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
