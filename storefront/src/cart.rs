// storefront/src/cart.rs

//! Session-local cart.
//!
//! A `Cart` is a plain value. It only changes through [`add_to_cart`] and
//! [`remove_from_cart`], which take the current cart and return the next
//! one. The total is derived from the entries on every read.

use crate::models::Item;

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
  pub item: Item,
  /// Always at least 1; an entry that would drop to 0 is removed.
  pub quantity: u32,
}

impl CartEntry {
  pub fn subtotal(&self) -> f64 {
    self.item.price * f64::from(self.quantity)
  }
}

/// Entries in insertion order, at most one per item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
  entries: Vec<CartEntry>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn entries(&self) -> &[CartEntry] {
    &self.entries
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn entry(&self, item_id: i64) -> Option<&CartEntry> {
    self.entries.iter().find(|e| e.item.id == item_id)
  }

  pub fn quantity_of(&self, item_id: i64) -> u32 {
    self.entry(item_id).map_or(0, |e| e.quantity)
  }

  /// Starts from `+0.0`: `Sum for f64` starts from `-0.0`, which an empty
  /// cart would print as `$-0`.
  pub fn total(&self) -> f64 {
    self.entries.iter().fold(0.0, |acc, e| acc + e.subtotal())
  }
}

/// One more of `item`: bumps the existing entry or appends a new one.
pub fn add_to_cart(cart: &Cart, item: &Item) -> Cart {
  let mut next = cart.clone();
  match next.entries.iter_mut().find(|e| e.item.id == item.id) {
    Some(entry) => entry.quantity += 1,
    None => next.entries.push(CartEntry {
      item: item.clone(),
      quantity: 1,
    }),
  }
  next
}

/// One less of `item`. The entry disappears when it reaches zero; removing
/// something not in the cart leaves the cart unchanged.
pub fn remove_from_cart(cart: &Cart, item: &Item) -> Cart {
  let mut next = cart.clone();
  if let Some(pos) = next.entries.iter().position(|e| e.item.id == item.id) {
    if next.entries[pos].quantity > 1 {
      next.entries[pos].quantity -= 1;
    } else {
      next.entries.remove(pos);
    }
  }
  next
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(id: i64, price: f64) -> Item {
    Item {
      id,
      name: format!("Item {}", id),
      price,
      category: None,
    }
  }

  #[test]
  fn adding_same_item_twice_merges_into_one_entry() {
    let coffee = item(1, 30.0);
    let cart = add_to_cart(&add_to_cart(&Cart::new(), &coffee), &coffee);

    assert_eq!(cart.entries().len(), 1);
    assert_eq!(cart.quantity_of(1), 2);
    assert_eq!(cart.total(), 60.0);
  }

  #[test]
  fn entries_keep_insertion_order() {
    let cart = [item(3, 1.0), item(1, 2.0), item(3, 1.0), item(2, 4.0)]
      .iter()
      .fold(Cart::new(), |cart, i| add_to_cart(&cart, i));

    let ids: Vec<i64> = cart.entries().iter().map(|e| e.item.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(cart.total(), 8.0);
  }

  #[test]
  fn removing_last_unit_drops_the_entry() {
    let fries = item(5, 35.0);
    let burger = item(7, 100.0);
    let cart = add_to_cart(&add_to_cart(&Cart::new(), &fries), &burger);
    assert_eq!(cart.total(), 135.0);

    let cart = remove_from_cart(&cart, &fries);
    assert!(cart.entry(5).is_none());
    assert_eq!(cart.quantity_of(5), 0);
    assert_eq!(cart.total(), 100.0);
  }

  #[test]
  fn removing_one_of_several_decrements() {
    let pizza = item(6, 120.0);
    let cart = add_to_cart(&add_to_cart(&Cart::new(), &pizza), &pizza);
    let cart = remove_from_cart(&cart, &pizza);

    assert_eq!(cart.quantity_of(6), 1);
    assert_eq!(cart.total(), 120.0);
  }

  #[test]
  fn removing_absent_item_is_a_no_op() {
    let cart = add_to_cart(&Cart::new(), &item(1, 30.0));
    let after = remove_from_cart(&cart, &item(2, 45.0));
    assert_eq!(after, cart);

    let empty = remove_from_cart(&Cart::new(), &item(1, 30.0));
    assert!(empty.is_empty());
    assert_eq!(empty.total(), 0.0);
  }

  #[test]
  fn empty_cart_total_is_positive_zero() {
    assert!(!Cart::new().total().is_sign_negative());

    let coffee = item(1, 30.0);
    let emptied = remove_from_cart(&add_to_cart(&Cart::new(), &coffee), &coffee);
    assert!(emptied.is_empty());
    assert!(!emptied.total().is_sign_negative());
    assert_eq!(format!("{}", emptied.total()), "0");
  }

  #[test]
  fn reducers_leave_the_input_cart_untouched() {
    let coffee = item(1, 30.0);
    let before = add_to_cart(&Cart::new(), &coffee);
    let _after = add_to_cart(&before, &coffee);
    assert_eq!(before.quantity_of(1), 1);
  }

  #[test]
  fn cart_keeps_the_price_it_was_given() {
    let cart = add_to_cart(&Cart::new(), &item(1, 30.0));
    // A later copy of the same item with a new price only bumps the quantity.
    let cart = add_to_cart(&cart, &item(1, 99.0));
    assert_eq!(cart.total(), 60.0);
  }
}
