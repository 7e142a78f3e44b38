// storefront/src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("HTTP transport error: {0}")]
  Http(#[from] reqwest::Error),

  // Any non-2xx answer from the catalog API. The status and body are
  // deliberately dropped; callers only learn that the request failed.
  #[error("{message}")]
  Request { message: String },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("No catalog item with id {0}")]
  UnknownItem(i64),

  #[error("The catalog has not been loaded")]
  NotReady,

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
