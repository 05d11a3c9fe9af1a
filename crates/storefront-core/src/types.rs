//! # Domain Types
//!
//! Core domain types shared by the cart, the checkout state machine, the
//! catalog crate and the shell.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │   CatalogItem   │   │   CheckoutStatus     │   │  PaymentMethod  │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  id (ItemId)    │   │  Idle                │   │  CashOnDelivery │  │
//! │  │  title          │   │  AwaitingMethod...   │   │  BankTransfer   │  │
//! │  │  price (Money)  │   │  AwaitingBank...     │   │  CreditCard     │  │
//! │  │  image (URL)    │   │  Completed           │   │                 │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CatalogItem` is owned by the external product source and is never
//! mutated here. The cart copies what it needs at add time
//! (see [`LineItem`](crate::cart::LineItem)).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Item Identifier
// =============================================================================

/// Identifier shared by a catalog product and its cart line.
///
/// Product APIs hand out numeric ids (`1`, `2`, ...) while hand-written
/// catalogs tend to use strings; both are kept in their decimal/string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(id)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId(id.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A product as published by the external catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Product identifier.
    pub id: ItemId,

    /// Display name.
    pub title: String,

    /// Current price. Non-negative (enforced by the catalog loader).
    pub price: Money,

    /// Product image URL.
    pub image: String,
}

impl CatalogItem {
    /// Creates a catalog item.
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}

// =============================================================================
// Checkout Status
// =============================================================================

/// The current stage of the payment flow.
///
/// ## State Diagram
/// ```text
/// Idle ──pay()[BankTransfer]──► AwaitingBankConfirmation ──confirm()──► Completed
/// Idle ──pay()[CashOnDelivery | CreditCard]─────────────────────────────► Completed
/// (any but Completed) ──close() / cart emptied──► Idle
/// ```
///
/// `AwaitingMethodSelection` is never stored on a session; it is the derived
/// stage reported by [`Session::stage`](crate::checkout::Session::stage)
/// while the panel is open on a non-empty, idle cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    /// Nothing in progress.
    #[default]
    Idle,
    /// Checkout panel open, the customer is choosing how to pay.
    AwaitingMethodSelection,
    /// Bank details shown, waiting for the customer to confirm the transfer.
    AwaitingBankConfirmation,
    /// Payment done. Terminal for this checkout attempt.
    Completed,
}

impl CheckoutStatus {
    /// Returns true for `Completed`.
    pub fn is_completed(&self) -> bool {
        matches!(self, CheckoutStatus::Completed)
    }
}

impl fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutStatus::Idle => write!(f, "idle"),
            CheckoutStatus::AwaitingMethodSelection => write!(f, "awaiting_method_selection"),
            CheckoutStatus::AwaitingBankConfirmation => write!(f, "awaiting_bank_confirmation"),
            CheckoutStatus::Completed => write!(f, "completed"),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer settles the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    #[default]
    CashOnDelivery,
    /// Manual transfer, confirmed by the customer afterwards.
    BankTransfer,
    /// Card payment, settles immediately.
    CreditCard,
}

impl PaymentMethod {
    /// All methods in picker order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CashOnDelivery,
        PaymentMethod::BankTransfer,
        PaymentMethod::CreditCard,
    ];

    /// Human-readable label as shown in the method picker.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }

    /// Whether paying with this method needs a separate confirmation step.
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, PaymentMethod::BankTransfer)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cod" | "cash" | "cash_on_delivery" | "cash on delivery" => {
                Ok(PaymentMethod::CashOnDelivery)
            }
            "bank" | "transfer" | "bank_transfer" | "bank transfer" => {
                Ok(PaymentMethod::BankTransfer)
            }
            "card" | "credit" | "credit_card" | "credit card" => Ok(PaymentMethod::CreditCard),
            other => Err(ValidationError::InvalidFormat {
                field: "payment method".to_string(),
                reason: format!("unknown method '{}', expected cod, bank or card", other),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
