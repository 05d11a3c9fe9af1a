//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core (this file)                                           │
//! │  ├── Rejection        - An action the state machine refused            │
//! │  └── ValidationError  - Malformed input data (prices, titles)          │
//! │                                                                         │
//! │  storefront-catalog                                                    │
//! │  └── CatalogError     - Fetching or decoding the product list          │
//! │                                                                         │
//! │  storefront-cli                                                        │
//! │  └── ApiError         - What the shell prints (code + message)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rejections are not failures
//! A `Rejection` is an expected outcome of user input (pressing "Pay" on an
//! empty cart, pressing "-" at quantity 1). It travels inside
//! [`Outcome::Ignored`](crate::checkout::Outcome) and the session is left
//! exactly as it was. Nothing in the core returns `Err` for these.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CheckoutStatus, ItemId};

// =============================================================================
// Rejection
// =============================================================================

/// Why the state machine ignored an action.
///
/// ## User Workflow
/// ```text
/// Click "Pay Now" with empty cart
///      │
///      ▼
/// dispatch(Action::Pay)
///      │
///      ▼
/// Outcome::Ignored(Rejection::EmptyCart)
///      │
///      ▼
/// UI shows: "Your cart is empty!"   (status stays Idle)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Quantity update below the minimum of 1.
    #[error("Quantity must be at least 1 (requested {requested})")]
    QuantityBelowMinimum { requested: i64 },

    /// Quantity update or add beyond the per-line maximum.
    #[error("Quantity cannot exceed {max} (requested {requested})")]
    QuantityAboveMaximum { requested: i64, max: u32 },

    /// Catalog item priced outside the accepted range.
    #[error("Item {id} has an unsupported price ({price})")]
    PriceOutOfRange { id: ItemId, price: Money },

    /// The id is not in the cart.
    #[error("Item {id} is not in the cart")]
    UnknownItem { id: ItemId },

    /// Payment attempted with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// The action requires a checkout that has not completed yet.
    #[error("Checkout is already completed")]
    CheckoutCompleted,

    /// `pay` pressed again while a bank transfer awaits confirmation.
    #[error("Bank transfer is already awaiting confirmation")]
    PaymentPending,

    /// `confirm_bank_transfer` outside `AwaitingBankConfirmation`.
    #[error("No bank transfer to confirm (checkout is {status})")]
    NothingToConfirm { status: CheckoutStatus },
}

impl Rejection {
    /// Whether the presentation layer should stay quiet about this rejection.
    ///
    /// Unknown ids come from stale UI rows; there is nothing useful to tell
    /// the user, so they are dropped without a notice.
    pub fn is_silent(&self) -> bool {
        matches!(self, Rejection::UnknownItem { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when externally supplied data (catalog entries,
/// configuration) doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value above the accepted maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::EmptyCart.to_string(), "Your cart is empty!");
        assert_eq!(
            Rejection::QuantityBelowMinimum { requested: -1 }.to_string(),
            "Quantity must be at least 1 (requested -1)"
        );
        assert_eq!(
            Rejection::UnknownItem { id: ItemId::from("7") }.to_string(),
            "Item 7 is not in the cart"
        );
        assert_eq!(
            Rejection::NothingToConfirm { status: CheckoutStatus::Idle }.to_string(),
            "No bank transfer to confirm (checkout is idle)"
        );
        assert_eq!(
            Rejection::QuantityAboveMaximum { requested: 1000, max: 999 }.to_string(),
            "Quantity cannot exceed 999 (requested 1000)"
        );
    }

    #[test]
    fn test_only_unknown_item_is_silent() {
        assert!(Rejection::UnknownItem { id: ItemId::from("1") }.is_silent());
        assert!(!Rejection::EmptyCart.is_silent());
        assert!(!Rejection::QuantityBelowMinimum { requested: 0 }.is_silent());
        assert!(!Rejection::PaymentPending.is_silent());
    }

    #[test]
    fn test_rejection_serializes_with_kind_tag() {
        let json = serde_json::to_value(Rejection::QuantityBelowMinimum { requested: 0 }).unwrap();
        assert_eq!(json["kind"], "quantity_below_minimum");
        assert_eq!(json["requested"], 0);
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
