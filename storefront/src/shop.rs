// storefront/src/shop.rs

//! The storefront view: catalog on one side, cart on the other.

use tracing::{error, info, instrument, warn};

use crate::cart::{add_to_cart, remove_from_cart, Cart};
use crate::errors::{ClientError, Result};
use crate::models::Item;
use crate::services::ItemService;

pub const LOADING_MESSAGE: &str = "Loading items...";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load items. Please make sure the backend server is running.";

#[derive(Debug, Clone, PartialEq)]
pub enum ShopState {
  Loading,
  Failed(String),
  Ready { items: Vec<Item>, cart: Cart },
}

/// User actions. `Add`/`Remove` carry the catalog id of the clicked row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopEvent {
  Add(i64),
  Remove(i64),
  /// Throw everything away and mount again.
  Reload,
}

pub struct Shop {
  service: ItemService,
  state: ShopState,
}

impl Shop {
  pub fn new(service: ItemService) -> Self {
    Self {
      service,
      state: ShopState::Loading,
    }
  }

  pub fn state(&self) -> &ShopState {
    &self.state
  }

  pub fn cart(&self) -> Option<&Cart> {
    match &self.state {
      ShopState::Ready { cart, .. } => Some(cart),
      _ => None,
    }
  }

  /// Fetches the catalog once. Any failure lands in `ShopState::Failed`
  /// with the generic load message.
  #[instrument(name = "shop::mount", skip(self))]
  pub async fn mount(&mut self) {
    self.state = ShopState::Loading;
    self.state = match self.service.get_all_items().await {
      Ok(items) => {
        info!("Loaded {} catalog items.", items.len());
        ShopState::Ready {
          items,
          cart: Cart::new(),
        }
      }
      Err(e) => {
        error!(error = %e, "Error fetching items.");
        ShopState::Failed(LOAD_ERROR_MESSAGE.to_string())
      }
    };
  }

  pub async fn dispatch(&mut self, event: ShopEvent) -> Result<()> {
    match event {
      ShopEvent::Reload => {
        self.mount().await;
        Ok(())
      }
      ShopEvent::Add(id) => self.apply(id, add_to_cart),
      ShopEvent::Remove(id) => self.apply(id, remove_from_cart),
    }
  }

  fn apply(&mut self, id: i64, reducer: fn(&Cart, &Item) -> Cart) -> Result<()> {
    let ShopState::Ready { items, cart } = &mut self.state else {
      warn!("Ignoring cart action on item {} before the catalog is loaded.", id);
      return Err(ClientError::NotReady);
    };
    let item = items.iter().find(|i| i.id == id).ok_or(ClientError::UnknownItem(id))?;
    *cart = reducer(cart, item);
    Ok(())
  }

  /// Re-derives the whole view from the fetched items and the current cart.
  pub fn render(&self) -> String {
    let mut out = String::new();
    match &self.state {
      ShopState::Loading => out.push_str(LOADING_MESSAGE),
      ShopState::Failed(message) => out.push_str(&format!("{}\n[retry]", message)),
      ShopState::Ready { items, cart } => {
        out.push_str("Shop\n");
        for item in items {
          out.push_str(&format!("  #{:<3} {:<24} ${:<8} [+]\n", item.id, item.name, item.price));
        }
        out.push_str("Cart\n");
        for entry in cart.entries() {
          out.push_str(&format!(
            "  #{:<3} {} ({}) [-]\n",
            entry.item.id, entry.item.name, entry.quantity
          ));
        }
        out.push_str(&format!("Total: ${}/-", cart.total()));
      }
    }
    out
  }
}
