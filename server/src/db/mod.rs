// catalog_server/src/db/mod.rs

//! The Catalog Store: SQLite persistence for catalog items.

pub mod catalog_store;
pub mod seed;

pub use catalog_store::CatalogStore;
