// catalog_server/src/web/routes.rs

use actix_web::{error::JsonPayloadError, error::PathError, web, HttpRequest};
use tracing::warn;

use crate::db::catalog_store::ITEM_NOT_FOUND;
use crate::errors::AppError;
use crate::web::handlers::{health_handlers, item_handlers};

// Malformed bodies and ids still answer with the `{"error": ...}` shape.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  warn!(error = %err, "Rejected malformed JSON body.");
  AppError::Validation(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
  warn!(error = %err, "Rejected unparsable item id.");
  AppError::NotFound(ITEM_NOT_FOUND.to_string()).into()
}

// This function is called in `main.rs` (and by the tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_handlers::health_check_handler))
        .service(
          web::scope("/items")
            .route("", web::get().to(item_handlers::list_items_handler))
            .route("", web::post().to(item_handlers::create_item_handler))
            .route("/{id}", web::get().to(item_handlers::get_item_handler))
            .route("/{id}", web::put().to(item_handlers::update_item_handler))
            .route("/{id}", web::delete().to(item_handlers::delete_item_handler)),
        ),
    );
}
