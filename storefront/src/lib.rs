// storefront/src/lib.rs

//! Storefront client: fetches the catalog from the catalog API, shows it,
//! and keeps a session-local cart.

pub mod cart;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod shop;

pub use crate::cart::{add_to_cart, remove_from_cart, Cart, CartEntry};
pub use crate::config::ClientConfig;
pub use crate::errors::{ClientError, Result};
pub use crate::models::{ApiMessage, Item, ItemDraft};
pub use crate::services::ItemService;
pub use crate::shop::{Shop, ShopEvent, ShopState};
