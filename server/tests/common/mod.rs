// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use actix_web::{web, App};
use catalog_server::{db::seed::SEED_ITEMS, AppState, CatalogStore};
use once_cell::sync::Lazy;
use tracing::Level;

pub const SEED_COUNT: usize = SEED_ITEMS.len();

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A freshly seeded in-memory store, isolated per test.
pub async fn seeded_state() -> AppState {
  setup_tracing();
  let store = CatalogStore::open_in_memory().await.expect("Failed to open in-memory store");
  store.initialize(true).await.expect("Failed to initialize store");
  AppState { store }
}

pub fn create_app(
  state: AppState,
) -> App<
  impl actix_web::dev::ServiceFactory<
    actix_web::dev::ServiceRequest,
    Config = (),
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(web::Data::new(state))
    .configure(catalog_server::web::configure_app_routes)
}
