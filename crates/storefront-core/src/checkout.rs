//! # Checkout State Machine
//!
//! A [`Session`] is the single, explicitly owned value behind one storefront
//! view: the cart plus the checkout flow. Every user interaction is an
//! [`Action`]; [`reduce`] turns `(session, action)` into the next session and
//! an [`Outcome`] telling the caller whether anything happened.
//!
//! ## Reducer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Presentation layer                                                    │
//! │        │ user clicks "Pay Now"                                          │
//! │        ▼                                                                │
//! │   reduce(session, Action::Pay) ──► (session', Outcome)                  │
//! │        │                                   │                            │
//! │        ▼                                   ▼                            │
//! │   redraw from session'          Applied → nothing to say                │
//! │                                 Ignored(r) → show r unless silent       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Protocol
//! ```text
//! Idle ──pay()[BankTransfer]──► AwaitingBankConfirmation ──confirm()──► Completed
//! Idle ──pay()[CashOnDelivery | CreditCard]─────────────────────────────► Completed
//! (any but Completed) ──close()──────────► Idle
//! (any but Completed) ──cart emptied─────► Idle
//! (any) ──reset()──► Idle, empty cart, CashOnDelivery
//! ```
//!
//! `Completed` survives closing and reopening the panel. Only
//! [`Action::Reset`] starts a new checkout attempt.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::Rejection;
use crate::types::{CatalogItem, CheckoutStatus, ItemId, PaymentMethod};

// =============================================================================
// Action
// =============================================================================

/// Everything the presentation layer can ask of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// "Add to Cart" on a product card.
    AddItem { item: CatalogItem },
    /// Trash icon on a cart line.
    RemoveItem { id: ItemId },
    /// Set a line's quantity directly.
    SetQuantity { id: ItemId, quantity: i64 },
    /// "+" on a cart line.
    Increment { id: ItemId },
    /// "-" on a cart line.
    Decrement { id: ItemId },
    /// Show the cart/checkout panel.
    OpenCheckout,
    /// Dismiss the cart/checkout panel.
    CloseCheckout,
    /// Pick a payment method.
    SelectMethod { method: PaymentMethod },
    /// "Pay Now".
    Pay,
    /// "Confirm Payment" on the bank transfer details.
    ConfirmBankTransfer,
    /// Start a new order after (or instead of) finishing this one.
    Reset,
}

// =============================================================================
// Outcome
// =============================================================================

/// Whether a dispatched action changed the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "result", content = "rejection", rename_all = "snake_case")]
pub enum Outcome {
    /// The action took effect.
    Applied,
    /// The action was refused; the session is unchanged.
    Ignored(Rejection),
}

impl Outcome {
    /// Returns true if the action took effect.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// The rejection, if the action was ignored.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied => None,
            Outcome::Ignored(rejection) => Some(rejection),
        }
    }

    /// The rejection to show the customer, skipping silent ones.
    pub fn notice(&self) -> Option<&Rejection> {
        self.rejection().filter(|rejection| !rejection.is_silent())
    }
}

impl From<Result<(), Rejection>> for Outcome {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(rejection) => Outcome::Ignored(rejection),
        }
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Checkout flow state: stored status, chosen method, panel visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Checkout {
    /// Stored status. Never `AwaitingMethodSelection` (see [`Session::stage`]).
    pub status: CheckoutStatus,

    /// Currently selected payment method.
    pub method: PaymentMethod,

    /// Whether the cart/checkout panel is showing.
    pub panel_open: bool,
}

// =============================================================================
// Session
// =============================================================================

/// Cart plus checkout for one customer session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub cart: Cart,
    pub checkout: Checkout,
}

impl Session {
    /// Creates an empty, idle session paying by cash on delivery.
    pub fn new() -> Self {
        Session::default()
    }

    /// The stored checkout status.
    pub fn status(&self) -> CheckoutStatus {
        self.checkout.status
    }

    /// The selected payment method.
    pub fn method(&self) -> PaymentMethod {
        self.checkout.method
    }

    /// The stage to display.
    ///
    /// Same as [`status`](Self::status), except that an idle session with
    /// the panel open and something in the cart is waiting for the customer
    /// to pick a payment method.
    pub fn stage(&self) -> CheckoutStatus {
        match self.checkout.status {
            CheckoutStatus::Idle if self.checkout.panel_open && !self.cart.is_empty() => {
                CheckoutStatus::AwaitingMethodSelection
            }
            status => status,
        }
    }

    /// Applies one action in place.
    ///
    /// A rejected action leaves `self` exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let result = match action {
            Action::AddItem { item } => self.cart.add_item(&item),
            Action::RemoveItem { id } => self.cart.remove_item(&id),
            Action::SetQuantity { id, quantity } => self.cart.set_quantity(&id, quantity),
            Action::Increment { id } => self.cart.adjust_quantity(&id, 1),
            Action::Decrement { id } => self.cart.adjust_quantity(&id, -1),
            Action::OpenCheckout => {
                self.checkout.panel_open = true;
                Ok(())
            }
            Action::CloseCheckout => {
                self.checkout.panel_open = false;
                self.abandon_pending_payment();
                Ok(())
            }
            Action::SelectMethod { method } => self.select_method(method),
            Action::Pay => self.pay(),
            Action::ConfirmBankTransfer => self.confirm_bank_transfer(),
            Action::Reset => {
                *self = Session {
                    checkout: Checkout {
                        panel_open: self.checkout.panel_open,
                        ..Checkout::default()
                    },
                    ..Session::default()
                };
                Ok(())
            }
        };

        if self.cart.is_empty() {
            self.abandon_pending_payment();
        }

        Outcome::from(result)
    }

    fn select_method(&mut self, method: PaymentMethod) -> Result<(), Rejection> {
        if self.checkout.status.is_completed() {
            return Err(Rejection::CheckoutCompleted);
        }

        self.checkout.method = method;
        Ok(())
    }

    fn pay(&mut self) -> Result<(), Rejection> {
        match self.checkout.status {
            CheckoutStatus::Completed => return Err(Rejection::CheckoutCompleted),
            CheckoutStatus::AwaitingBankConfirmation => return Err(Rejection::PaymentPending),
            CheckoutStatus::Idle | CheckoutStatus::AwaitingMethodSelection => {}
        }

        if self.cart.is_empty() {
            return Err(Rejection::EmptyCart);
        }

        self.checkout.status = if self.checkout.method.needs_confirmation() {
            CheckoutStatus::AwaitingBankConfirmation
        } else {
            CheckoutStatus::Completed
        };
        Ok(())
    }

    fn confirm_bank_transfer(&mut self) -> Result<(), Rejection> {
        if self.checkout.status != CheckoutStatus::AwaitingBankConfirmation {
            return Err(Rejection::NothingToConfirm {
                status: self.checkout.status,
            });
        }

        self.checkout.status = CheckoutStatus::Completed;
        Ok(())
    }

    /// Back to `Idle` unless the checkout already completed.
    fn abandon_pending_payment(&mut self) {
        if !self.checkout.status.is_completed() {
            self.checkout.status = CheckoutStatus::Idle;
        }
    }
}

/// Pure reducer: `(session, action) -> (session', outcome)`.
///
/// ## Example
/// ```rust
/// use storefront_core::checkout::{reduce, Action, Outcome, Session};
/// use storefront_core::error::Rejection;
/// use storefront_core::CheckoutStatus;
///
/// let (session, outcome) = reduce(Session::new(), Action::Pay);
/// assert_eq!(outcome, Outcome::Ignored(Rejection::EmptyCart));
/// assert_eq!(session.status(), CheckoutStatus::Idle);
/// ```
pub fn reduce(mut session: Session, action: Action) -> (Session, Outcome) {
    let outcome = session.dispatch(action);
    (session, outcome)
}

// =============================================================================
// Unit Tests
// =============================================================================
