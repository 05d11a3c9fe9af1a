//! # Cart
//!
//! The ordered collection of line items and the derived values shown to the
//! customer (badge count, total).
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Method                  Change                │
//! │  ───────────              ──────                  ──────                │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add_item() ───────────► push or qty += 1      │
//! │                                                                         │
//! │  "+" / "-" ─────────────► set_quantity(q ± 1) ──► items[i].qty = n      │
//! │                                                                         │
//! │  Trash icon ────────────► remove_item() ────────► items.remove(i)       │
//! │                                                                         │
//! │  Badge / footer ────────► item_count(), total() (read only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `ItemId`
//! - Every quantity is between 1 and [`MAX_ITEM_QUANTITY`]
//! - Insertion order is display order
//! - `total()` is always recomputed from the lines; nothing is cached

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::Rejection;
use crate::money::Money;
use crate::types::{CatalogItem, ItemId};
use crate::validation::validate_price;

/// Smallest quantity a line can hold.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a line can hold.
///
/// Catches a mistyped quantity (1000 instead of 10) and, together with
/// [`MAX_PRICE`](crate::validation::MAX_PRICE), keeps line totals far from
/// the `i64` limit.
pub const MAX_ITEM_QUANTITY: u32 = 999;

// =============================================================================
// Line Item
// =============================================================================

/// One product's entry in the cart.
///
/// ## Snapshot Pattern
/// `title` and `price` are copied from the catalog when the line is
/// created. A later catalog price change does not reach into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Same id as the catalog product.
    pub id: ItemId,

    /// Price at time of adding (frozen).
    pub price: Money,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Always ≥ 1.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a quantity-1 line from a catalog product.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        LineItem {
            id: item.id.clone(),
            price: item.price,
            title: item.title.clone(),
            quantity: MIN_QUANTITY,
        }
    }

    /// Price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Lines in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    /// Adds a catalog product, or bumps the quantity of its existing line.
    ///
    /// ## Behavior
    /// - Already in cart: quantity + 1, title/price untouched
    /// - Not in cart: appended with quantity 1 and a price snapshot
    /// - Line already at [`MAX_ITEM_QUANTITY`]: rejected, cart unchanged
    /// - Price negative or above `MAX_PRICE`: rejected, cart unchanged
    pub fn add_item(&mut self, item: &CatalogItem) -> Result<(), Rejection> {
        if let Some(line) = self.items.iter_mut().find(|line| line.id == item.id) {
            if line.quantity >= MAX_ITEM_QUANTITY {
                return Err(Rejection::QuantityAboveMaximum {
                    requested: i64::from(line.quantity) + 1,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity += 1;
            return Ok(());
        }

        if validate_price(item.price).is_err() {
            return Err(Rejection::PriceOutOfRange {
                id: item.id.clone(),
                price: item.price,
            });
        }

        self.items.push(LineItem::from_catalog(item));
        Ok(())
    }

    /// Removes the line with this id.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<(), Rejection> {
        let position = self
            .items
            .iter()
            .position(|line| &line.id == id)
            .ok_or_else(|| Rejection::UnknownItem { id: id.clone() })?;

        self.items.remove(position);
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity < 1`: rejected, cart unchanged (the line is NOT removed)
    /// - `quantity > MAX_ITEM_QUANTITY`: rejected, cart unchanged
    /// - id not in cart: rejected, cart unchanged
    /// - otherwise: quantity set exactly
    ///
    /// `quantity` is signed because it usually arrives as `current - 1`.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> Result<(), Rejection> {
        if quantity < i64::from(MIN_QUANTITY) {
            return Err(Rejection::QuantityBelowMinimum {
                requested: quantity,
            });
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q <= MAX_ITEM_QUANTITY)
            .ok_or(Rejection::QuantityAboveMaximum {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            })?;

        let line = self
            .items
            .iter_mut()
            .find(|line| &line.id == id)
            .ok_or_else(|| Rejection::UnknownItem { id: id.clone() })?;

        line.quantity = quantity;
        Ok(())
    }

    /// `set_quantity(id, current + delta)` for the line's current quantity.
    ///
    /// Backs the "+" (`delta = 1`) and "-" (`delta = -1`) buttons.
    pub fn adjust_quantity(&mut self, id: &ItemId, delta: i64) -> Result<(), Rejection> {
        let current = self
            .get(id)
            .map(|line| i64::from(line.quantity))
            .ok_or_else(|| Rejection::UnknownItem { id: id.clone() })?;

        self.set_quantity(id, current.saturating_add(delta))
    }

    /// Number of distinct lines (the badge value, not the sum of quantities).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Σ price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The total rendered with exactly two decimals, e.g. `"20.00"`.
    pub fn formatted_total(&self) -> String {
        self.total().to_string()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_PRICE;

    fn product(id: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(
            id,
            format!("Product {}", id),
            Money::from_cents(cents),
            format!("https://img.example/{}.jpg", id),
        )
    }

    #[test]
    fn test_add_same_product_twice_accumulates_quantity() {
        let mut cart = Cart::new();
        let a = product("A", 1000);

        cart.add_item(&a).unwrap();
        cart.add_item(&a).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.formatted_total(), "20.00");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&product("B", 550)).unwrap();
        cart.add_item(&product("C", 225)).unwrap();
        cart.add_item(&product("B", 550)).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C"]);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.formatted_total(), "13.25");
    }

    #[test]
    fn test_price_is_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut a = product("A", 1000);
        cart.add_item(&a).unwrap();

        // Catalog reprices the product; the existing line keeps its snapshot
        a.price = Money::from_cents(9999);
        a.title = "Renamed".to_string();
        cart.add_item(&a).unwrap();

        let line = cart.get(&ItemId::from("A")).unwrap();
        assert_eq!(line.price.cents(), 1000);
        assert_eq!(line.title, "Product A");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_set_quantity_below_one_is_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&product("A", 1000)).unwrap();
        let before = cart.clone();

        for bad in [0, -1, i64::MIN] {
            assert_eq!(
                cart.set_quantity(&ItemId::from("A"), bad),
                Err(Rejection::QuantityBelowMinimum { requested: bad })
            );
            assert_eq!(cart, before);
        }
    }

    #[test]
    fn test_set_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        cart.add_item(&product("A", 250)).unwrap();

        cart.set_quantity(&ItemId::from("A"), 4).unwrap();

        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.formatted_total(), "10.00");
    }

    #[test]
    fn test_unknown_ids_are_rejected_without_change() {
        let mut cart = Cart::new();
        cart.add_item(&product("A", 250)).unwrap();
        let before = cart.clone();
        let ghost = ItemId::from("ghost");

        assert_eq!(
            cart.remove_item(&ghost),
            Err(Rejection::UnknownItem { id: ghost.clone() })
        );
        assert_eq!(
            cart.set_quantity(&ghost, 3),
            Err(Rejection::UnknownItem { id: ghost.clone() })
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_decrement_at_one_keeps_the_line() {
        let mut cart = Cart::new();
        cart.add_item(&product("A", 250)).unwrap();

        let result = cart.adjust_quantity(&ItemId::from("A"), -1);

        assert_eq!(result, Err(Rejection::QuantityBelowMinimum { requested: 0 }));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new();
        let id = ItemId::from("A");
        cart.add_item(&product("A", 100)).unwrap();

        cart.adjust_quantity(&id, 1).unwrap();
        cart.adjust_quantity(&id, 1).unwrap();
        cart.adjust_quantity(&id, -1).unwrap();

        assert_eq!(cart.get(&id).unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_last_item_empties_cart() {
        let mut cart = Cart::new();
        let a = product("A", 1000);
        for _ in 0..3 {
            cart.add_item(&a).unwrap();
        }

        cart.remove_item(&a.id).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.formatted_total(), "0.00");
    }

    #[test]
    fn test_quantity_above_maximum_is_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&product("A", 1000)).unwrap();
        let before = cart.clone();
        let id = ItemId::from("A");

        for bad in [i64::from(MAX_ITEM_QUANTITY) + 1, 5_000_000_000, i64::MAX] {
            assert_eq!(
                cart.set_quantity(&id, bad),
                Err(Rejection::QuantityAboveMaximum {
                    requested: bad,
                    max: MAX_ITEM_QUANTITY
                })
            );
            assert_eq!(cart, before);
        }

        cart.set_quantity(&id, i64::from(MAX_ITEM_QUANTITY)).unwrap();
        assert_eq!(cart.items()[0].quantity, MAX_ITEM_QUANTITY);
        assert!(cart.adjust_quantity(&id, 1).is_err());
    }

    #[test]
    fn test_add_stops_at_maximum() {
        let mut cart = Cart::new();
        let a = product("A", 100);
        cart.add_item(&a).unwrap();
        cart.set_quantity(&a.id, i64::from(MAX_ITEM_QUANTITY)).unwrap();

        assert_eq!(
            cart.add_item(&a),
            Err(Rejection::QuantityAboveMaximum {
                requested: i64::from(MAX_ITEM_QUANTITY) + 1,
                max: MAX_ITEM_QUANTITY
            })
        );
        assert_eq!(cart.items()[0].quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_out_of_range_price_is_not_added() {
        let mut cart = Cart::new();
        let huge = product("H", 5_000_000_000_000_000_000);

        assert_eq!(
            cart.add_item(&huge),
            Err(Rejection::PriceOutOfRange {
                id: huge.id.clone(),
                price: huge.price
            })
        );
        assert!(cart.is_empty());
        assert_eq!(cart.formatted_total(), "0.00");
    }

    #[test]
    fn test_largest_cart_line_totals_exactly() {
        let mut cart = Cart::new();
        let priciest = CatalogItem::new("P", "Priciest", MAX_PRICE, "");
        cart.add_item(&priciest).unwrap();
        cart.set_quantity(&priciest.id, i64::from(MAX_ITEM_QUANTITY)).unwrap();

        assert_eq!(
            cart.total().cents(),
            MAX_PRICE.cents() * i64::from(MAX_ITEM_QUANTITY)
        );
    }
}
