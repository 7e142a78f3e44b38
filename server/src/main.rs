// catalog_server/src/main.rs

use std::net::TcpListener;

use anyhow::Context;
use catalog_server::{build_server, AppConfig, AppState, CatalogStore};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting catalog server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  let store = CatalogStore::connect(&app_config.database_url)
    .await
    .context("Failed to open the catalog database")?;
  store
    .initialize(app_config.seed_db)
    .await
    .context("Failed to initialize the items table")?;

  let server_address = app_config.bind_address();
  let listener = TcpListener::bind(&server_address).with_context(|| format!("Failed to bind {}", server_address))?;
  tracing::info!("Server is running on {}", server_address);

  // Resolves once actix-web has handled SIGINT/SIGTERM and drained its workers.
  let result = build_server(AppState { store: store.clone() }, listener)?.await;

  store.close().await;
  result.context("HTTP server terminated with an error")
}
