// catalog_server/src/lib.rs

//! Catalog server: a single-table item catalog stored in SQLite and exposed
//! as a JSON REST API under `/api/items`.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, web as actix_data, App, HttpServer};

pub use crate::config::AppConfig;
pub use crate::db::CatalogStore;
pub use crate::errors::{AppError, Result};
pub use crate::models::{Item, ItemPayload};
pub use crate::state::AppState;

/// Builds the HTTP server on an already bound listener. Binding separately
/// lets callers pick port 0 and read the assigned address back.
pub fn build_server(app_state: AppState, listener: TcpListener) -> std::io::Result<Server> {
  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(Cors::permissive()) // The storefront may be served from any origin
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .listen(listener)?
  .run();
  Ok(server)
}
