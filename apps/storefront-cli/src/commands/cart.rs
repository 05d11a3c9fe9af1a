//! # Cart Commands
//!
//! Cart manipulation on the current session.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Completed│       │
//! │  │  Cart    │     │          │     │  Panel   │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                             │             │
//! │       │           update_cart_item                        │             │
//! │       │           increment / decrement                   │             │
//! │       │           remove_from_cart                        │             │
//! │       │                                                   │             │
//! │       └────────────── new_order (checkout.rs) ◄───────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Silent rejections (an id that is not in the cart) come back as the
//! unchanged cart, not as an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_catalog::Catalog;
use storefront_core::{Action, Cart, ItemId, LineItem, Outcome};

use crate::commands::catalog::get_product;
use crate::error::ApiError;
use crate::state::SessionState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub title: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

/// Cart totals for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products (the cart badge)
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_cents: i64,
}

impl From<&LineItem> for CartLine {
    fn from(line: &LineItem) -> Self {
        CartLine {
            id: line.id.to_string(),
            title: line.title.clone(),
            quantity: line.quantity,
            unit_price_cents: line.price.cents(),
            line_total_cents: line.line_total().cents(),
        }
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
        }
    }
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().iter().map(CartLine::from).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Turns an outcome into the command result.
///
/// Silent rejections count as success.
pub(crate) fn check(outcome: Outcome) -> Result<(), ApiError> {
    match outcome.notice() {
        Some(rejection) => Err(ApiError::from(rejection.clone())),
        None => Ok(()),
    }
}

fn cart_response(state: &SessionState) -> CartResponse {
    state.with_session(|s| CartResponse::from(&s.cart))
}

/// Gets the current cart contents.
pub fn get_cart(state: &SessionState) -> CartResponse {
    debug!("get_cart command");
    cart_response(state)
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by one
/// - Not in cart: added with quantity 1
/// - Price and title are frozen at the time of adding
pub fn add_to_cart(
    catalog: &Catalog,
    state: &mut SessionState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let item = get_product(catalog, product_id)?;
    check(state.dispatch(Action::AddItem { item }))?;

    Ok(cart_response(state))
}

/// Sets the quantity of a cart line.
///
/// Quantities below 1 are refused; use [`remove_from_cart`] instead.
pub fn update_cart_item(
    state: &mut SessionState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    check(state.dispatch(Action::SetQuantity {
        id: ItemId::new(product_id),
        quantity,
    }))?;

    Ok(cart_response(state))
}

/// "+" on a cart line.
pub fn increment_item(state: &mut SessionState, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "increment_item command");

    check(state.dispatch(Action::Increment {
        id: ItemId::new(product_id),
    }))?;

    Ok(cart_response(state))
}

/// "-" on a cart line. Refused at quantity 1.
pub fn decrement_item(state: &mut SessionState, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "decrement_item command");

    check(state.dispatch(Action::Decrement {
        id: ItemId::new(product_id),
    }))?;

    Ok(cart_response(state))
}

/// Removes a line from the cart.
pub fn remove_from_cart(
    state: &mut SessionState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    check(state.dispatch(Action::RemoveItem {
        id: ItemId::new(product_id),
    }))?;

    Ok(cart_response(state))
}
