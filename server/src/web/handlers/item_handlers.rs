// catalog_server/src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::ItemPayload;
use crate::state::AppState;

#[instrument(name = "handler::list_items", skip(app_state))]
pub async fn list_items_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = app_state.store.list().await?;
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::get_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn get_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let item = app_state.store.get(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::create_item", skip(app_state, req_payload))]
pub async fn create_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ItemPayload>,
) -> Result<HttpResponse, AppError> {
  let created = app_state.store.insert(req_payload.into_inner()).await?;
  info!("Created item {} ('{}').", created.id, created.name);
  Ok(HttpResponse::Ok().json(created))
}

#[instrument(name = "handler::update_item", skip(app_state, path, req_payload), fields(item_id = %path.as_ref()))]
pub async fn update_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_payload: web::Json<ItemPayload>,
) -> Result<HttpResponse, AppError> {
  app_state.store.update(path.into_inner(), req_payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Item updated successfully" })))
}

#[instrument(name = "handler::delete_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn delete_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  app_state.store.delete(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Item deleted successfully" })))
}
