// catalog_server/src/state.rs
use crate::db::CatalogStore;

/// Shared with every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
  pub store: CatalogStore,
}
