// catalog_server/src/models/mod.rs

//! Contains data structures representing database entities.

pub mod item;

pub use item::{Item, ItemPayload};
