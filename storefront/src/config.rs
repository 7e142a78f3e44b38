// storefront/src/config.rs

use crate::errors::{ClientError, Result};
use dotenvy::dotenv;
use reqwest::Url;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base of the catalog API, without a trailing slash (`.../api`).
  pub api_base_url: String,
}

impl ClientConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let raw = lookup("STOREFRONT_API_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let parsed =
      Url::parse(&raw).map_err(|e| ClientError::Config(format!("Invalid STOREFRONT_API_URL '{}': {}", raw, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
      return Err(ClientError::Config(format!(
        "STOREFRONT_API_URL must be http(s), got '{}'",
        raw
      )));
    }

    Ok(Self {
      api_base_url: raw.trim_end_matches('/').to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_points_at_local_server() {
    let cfg = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
  }

  #[test]
  fn trailing_slash_is_trimmed() {
    let cfg = ClientConfig::from_lookup(|_| Some("http://shop.local:8080/api/".to_string())).unwrap();
    assert_eq!(cfg.api_base_url, "http://shop.local:8080/api");
  }

  #[test]
  fn non_http_url_is_rejected() {
    let err = ClientConfig::from_lookup(|_| Some("ftp://shop.local/api".to_string())).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    let err = ClientConfig::from_lookup(|_| Some("not a url".to_string())).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
  }
}
