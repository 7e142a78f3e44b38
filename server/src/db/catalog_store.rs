// catalog_server/src/db/catalog_store.rs

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{error, info, instrument, warn};

use crate::db::seed::SEED_ITEMS;
use crate::errors::{AppError, Result};
use crate::models::{Item, ItemPayload};

const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  price REAL NOT NULL,
  category TEXT,
  created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

const ITEM_COLUMNS: &str = "id, name, price, category, created_at";

pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const NAME_AND_PRICE_REQUIRED: &str = "Name and price are required";

/// Owns the SQLite pool backing the `items` table.
///
/// Every operation is a single statement; the only multi-statement
/// transaction is the initial seed.
#[derive(Clone, Debug)]
pub struct CatalogStore {
  pool: SqlitePool,
}

impl CatalogStore {
  /// Opens (creating if missing) the SQLite file named by `database_url`.
  pub async fn connect(database_url: &str) -> Result<Self> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().max_connections(5).connect_with(options).await?;
    info!(%database_url, "Connected to the catalog database.");
    Ok(Self { pool })
  }

  /// A private in-memory database. One connection that never idles out,
  /// otherwise the database would vanish with it.
  pub async fn open_in_memory() -> Result<Self> {
    let pool = SqlitePoolOptions::new()
      .max_connections(1)
      .idle_timeout(None)
      .max_lifetime(None)
      .connect("sqlite::memory:")
      .await?;
    Ok(Self { pool })
  }

  /// Creates the `items` table if absent and, when `seed` is set and the
  /// table is empty, writes the sample catalog.
  #[instrument(name = "store::initialize", skip(self))]
  pub async fn initialize(&self, seed: bool) -> Result<()> {
    sqlx::query(CREATE_ITEMS_TABLE).execute(&self.pool).await.map_err(|e| {
      error!("Failed to create items table: {}", e);
      AppError::Store(e)
    })?;

    if !seed {
      return Ok(());
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
      .fetch_one(&self.pool)
      .await?;
    if count > 0 {
      info!("Items table already holds {} rows, skipping seed.", count);
      return Ok(());
    }

    let mut tx = self.pool.begin().await?;
    for (name, price, category) in SEED_ITEMS {
      sqlx::query("INSERT INTO items (name, price, category) VALUES (?, ?, ?)")
        .bind(*name)
        .bind(*price)
        .bind(*category)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    info!("Initial data inserted into database ({} items).", SEED_ITEMS.len());
    Ok(())
  }

  #[instrument(name = "store::list", skip(self))]
  pub async fn list(&self) -> Result<Vec<Item>> {
    let items: Vec<Item> = sqlx::query_as(&format!("SELECT {} FROM items ORDER BY id", ITEM_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch items from database: {}", e);
        AppError::Store(e)
      })?;

    info!("Fetched {} items.", items.len());
    Ok(items)
  }

  #[instrument(name = "store::get", skip(self))]
  pub async fn get(&self, id: i64) -> Result<Item> {
    let item: Option<Item> = sqlx::query_as(&format!("SELECT {} FROM items WHERE id = ?", ITEM_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while fetching item {}: {}", id, e);
        AppError::Store(e)
      })?;

    item.ok_or_else(|| {
      warn!("Item with ID {} not found.", id);
      AppError::NotFound(ITEM_NOT_FOUND.to_string())
    })
  }

  /// Inserts a new item. `name` must be non-empty and `price` non-zero;
  /// an empty `category` is stored as NULL.
  #[instrument(name = "store::insert", skip(self))]
  pub async fn insert(&self, payload: ItemPayload) -> Result<Item> {
    let name = payload.name.filter(|n| !n.is_empty());
    let price = payload.price.filter(|p| *p != 0.0);
    let (name, price) = match (name, price) {
      (Some(name), Some(price)) => (name, price),
      _ => {
        warn!("Rejected item creation with missing name or price.");
        return Err(AppError::Validation(NAME_AND_PRICE_REQUIRED.to_string()));
      }
    };
    let category = payload.category.filter(|c| !c.is_empty());

    let created: Item = sqlx::query_as(&format!(
      "INSERT INTO items (name, price, category) VALUES (?, ?, ?) RETURNING {}",
      ITEM_COLUMNS
    ))
    .bind(&name)
    .bind(price)
    .bind(&category)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to insert item '{}': {}", name, e);
      AppError::Store(e)
    })?;

    info!(id = created.id, "Item created.");
    Ok(created)
  }

  /// Overwrites name, price and category of item `id` with exactly what was
  /// passed. Absent fields are written as NULL, so a missing name or price
  /// fails on the NOT NULL constraint.
  #[instrument(name = "store::update", skip(self))]
  pub async fn update(&self, id: i64, payload: ItemPayload) -> Result<()> {
    let result = sqlx::query("UPDATE items SET name = ?, price = ?, category = ? WHERE id = ?")
      .bind(&payload.name)
      .bind(payload.price)
      .bind(&payload.category)
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to update item {}: {}", id, e);
        AppError::Store(e)
      })?;

    if result.rows_affected() == 0 {
      warn!("Update matched no item with ID {}.", id);
      return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
    }
    info!("Item {} updated.", id);
    Ok(())
  }

  #[instrument(name = "store::delete", skip(self))]
  pub async fn delete(&self, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to delete item {}: {}", id, e);
        AppError::Store(e)
      })?;

    if result.rows_affected() == 0 {
      warn!("Delete matched no item with ID {}.", id);
      return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
    }
    info!("Item {} deleted.", id);
    Ok(())
  }

  pub async fn close(&self) {
    self.pool.close().await;
    info!("Database connection closed.");
  }
}
