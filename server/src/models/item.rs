// catalog_server/src/models/item.rs

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Item {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub category: Option<String>,
  // Filled by the column default at insertion, never by the client.
  pub created_at: NaiveDateTime,
}

/// Body of `POST /api/items` and `PUT /api/items/{id}`.
///
/// Every field is optional on the wire: creation checks presence itself,
/// update writes whatever was sent (absent fields become NULL).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPayload {
  pub name: Option<String>,
  #[serde(default, deserialize_with = "lenient_price")]
  pub price: Option<f64>,
  pub category: Option<String>,
}

/// Accepts a JSON number or a numeric string (`"25"`), the way SQLite's REAL
/// affinity would store it. `null` and `""` count as absent.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null) => Ok(None),
    Some(Value::Number(n)) => n
      .as_f64()
      .map(Some)
      .ok_or_else(|| de::Error::custom(format!("price {} is out of range", n))),
    Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
    Some(Value::String(s)) => s
      .trim()
      .parse::<f64>()
      .map(Some)
      .map_err(|_| de::Error::custom(format!("price '{}' is not a number", s))),
    Some(other) => Err(de::Error::custom(format!("price must be a number, got {}", other))),
  }
}

impl ItemPayload {
  pub fn new(name: impl Into<String>, price: f64, category: Option<&str>) -> Self {
    Self {
      name: Some(name.into()),
      price: Some(price),
      category: category.map(str::to_string),
    }
  }
}
