// storefront/src/models.rs

//! Client-side copies of what the catalog API sends and accepts.

use serde::{Deserialize, Serialize};

/// A catalog item as fetched from the API. The storefront keeps these by
/// value, so later server-side edits never reach an item already in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub id: i64,
  pub name: String,
  pub price: f64,
  #[serde(default)]
  pub category: Option<String>,
}

/// Body for creating or overwriting an item.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemDraft {
  pub name: Option<String>,
  pub price: Option<f64>,
  pub category: Option<String>,
}

impl ItemDraft {
  pub fn new(name: impl Into<String>, price: f64) -> Self {
    Self {
      name: Some(name.into()),
      price: Some(price),
      category: None,
    }
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }
}

/// `{"message": ...}` acknowledgement returned by update and delete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiMessage {
  pub message: String,
}
