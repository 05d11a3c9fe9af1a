//! # storefront-core: Cart & Checkout Logic
//!
//! This crate is the heart of the storefront. It contains the cart and the
//! checkout state machine as plain values and pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (storefront-cli shell)                │   │
//! │  │   products ──► add / qty / remove ──► method ──► pay / confirm  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Action                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │   │   │
//! │  │   │ CatalogIt │  │   Money   │  │   Cart    │  │  Session  │   │   │
//! │  │   │ PaymentMe │  │           │  │ LineItem  │  │  reduce   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │         storefront-catalog (read-only product list)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, CheckoutStatus, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart and LineItem
//! - [`checkout`] - Session, Action, Outcome and the reducer
//! - [`error`] - Rejection and validation error types
//! - [`validation`] - Rules for externally supplied data
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{reduce, Action, CatalogItem, CheckoutStatus, Money, PaymentMethod, Session};
//!
//! let backpack = CatalogItem::new("1", "Backpack", Money::from_cents(1000), "https://img/1.jpg");
//!
//! let (session, _) = reduce(Session::new(), Action::AddItem { item: backpack.clone() });
//! let (session, _) = reduce(session, Action::AddItem { item: backpack });
//! assert_eq!(session.cart.item_count(), 1);
//! assert_eq!(session.cart.formatted_total(), "20.00");
//!
//! let (session, _) = reduce(session, Action::SelectMethod { method: PaymentMethod::BankTransfer });
//! let (session, outcome) = reduce(session, Action::Pay);
//! assert!(outcome.is_applied());
//! assert_eq!(session.status(), CheckoutStatus::AwaitingBankConfirmation);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, LineItem};
pub use checkout::{reduce, Action, Checkout, Outcome, Session};
pub use error::{Rejection, ValidationError};
pub use money::Money;
pub use types::*;
