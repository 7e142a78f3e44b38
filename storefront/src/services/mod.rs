// storefront/src/services/mod.rs

pub mod item_service;

pub use item_service::ItemService;
