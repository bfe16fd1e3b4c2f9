//! Cora Daemon - HTTP front end for the compliance assistant.
//!
//! Loads configuration from the environment, wires the HTTP clients, and
//! serves the answer API plus a minimal browser page.

use anyhow::Result;
use cora_common::{Assistant, Config};
use corad::server::{self, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8087";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("corad v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    config.log_summary();

    let assistant = Assistant::from_config(&config);

    let addr =
        std::env::var("CORA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    server::run(AppState::new(assistant), &addr).await
}
