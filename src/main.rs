use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rainsearch::client::RainforestClient;
use rainsearch::config::Config;
use rainsearch::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Seed the environment from a local .env before clap reads it;
    // a missing or malformed file is ignored.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    if config.api_key.is_none() {
        warn!("RAINFOREST_API_KEY is not set; the page will show an error banner");
    }

    let client = RainforestClient::new(&config)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("serving on http://127.0.0.1:{} (set PORT to change)", config.port);

    let state = AppState { config, client };
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
