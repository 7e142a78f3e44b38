// storefront/src/services/item_service.rs

//! Thin wrapper over the catalog REST API.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::errors::{ClientError, Result};
use crate::models::{ApiMessage, Item, ItemDraft};

#[derive(Debug, Clone)]
pub struct ItemService {
  client: Client,
  base_url: String,
}

impl ItemService {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = ClientBuilder::new()
      .user_agent("storefront/0.1 (+reqwest)")
      .pool_idle_timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self {
      client,
      base_url: base_url.into(),
    })
  }

  fn items_url(&self) -> String {
    format!("{}/items", self.base_url)
  }

  fn item_url(&self, id: i64) -> String {
    format!("{}/items/{}", self.base_url, id)
  }

  #[instrument(name = "item_service::get_all_items", skip(self))]
  pub async fn get_all_items(&self) -> Result<Vec<Item>> {
    self
      .send_json(self.client.get(self.items_url()), "Failed to fetch items".to_string())
      .await
  }

  #[instrument(name = "item_service::get_item_by_id", skip(self))]
  pub async fn get_item_by_id(&self, id: i64) -> Result<Item> {
    self
      .send_json(
        self.client.get(self.item_url(id)),
        format!("Failed to fetch item with id {}", id),
      )
      .await
  }

  #[instrument(name = "item_service::add_item", skip(self))]
  pub async fn add_item(&self, draft: &ItemDraft) -> Result<Item> {
    self
      .send_json(self.client.post(self.items_url()).json(draft), "Failed to add item".to_string())
      .await
  }

  #[instrument(name = "item_service::update_item", skip(self))]
  pub async fn update_item(&self, id: i64, draft: &ItemDraft) -> Result<ApiMessage> {
    self
      .send_json(
        self.client.put(self.item_url(id)).json(draft),
        format!("Failed to update item with id {}", id),
      )
      .await
  }

  #[instrument(name = "item_service::delete_item", skip(self))]
  pub async fn delete_item(&self, id: i64) -> Result<ApiMessage> {
    self
      .send_json(
        self.client.delete(self.item_url(id)),
        format!("Failed to delete item with id {}", id),
      )
      .await
  }

  /// Sends `request` and decodes a 2xx JSON body. Every failure is logged
  /// here; a non-2xx answer becomes `ClientError::Request { failure }`.
  async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, failure: String) -> Result<T> {
    let response = request.send().await.map_err(|e| {
      error!(error = %e, "{}", failure);
      ClientError::Http(e)
    })?;

    let status = response.status();
    if !status.is_success() {
      error!(%status, "{}", failure);
      return Err(ClientError::Request { message: failure });
    }
    debug!(%status, "Catalog API request succeeded.");

    response.json::<T>().await.map_err(|e| {
      error!(error = %e, "{}: undecodable response body", failure);
      ClientError::Http(e)
    })
  }
}
