//! # Checkout Commands
//!
//! Panel visibility, payment method, pay / confirm, and the receipt.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  open_checkout ──► select_method ──► pay                                │
//! │                                       │                                 │
//! │            ┌──────────────────────────┴───────────────────┐             │
//! │            ▼                                              ▼             │
//! │  Bank Transfer                                 Cash on Delivery /       │
//! │  status: awaiting_bank_confirmation            Credit Card              │
//! │  response carries BankDetails                  status: completed        │
//! │            │                                   response carries receipt │
//! │            ▼                                                            │
//! │  confirm_payment ──► status: completed, response carries receipt        │
//! │                                                                         │
//! │  new_order ──► empty cart, idle, cash on delivery                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use storefront_core::{Action, CheckoutStatus, PaymentMethod, Session};

use crate::commands::cart::check;
use crate::error::ApiError;
use crate::state::{BankDetails, ConfigState, SessionState};

/// Checkout panel state after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Stage to display (includes the derived awaiting_method_selection)
    pub status: CheckoutStatus,
    pub method: PaymentMethod,
    pub panel_open: bool,
    pub item_count: usize,
    pub total_cents: i64,

    /// Present while a bank transfer awaits confirmation
    pub bank_details: Option<BankDetails>,

    /// Present when this command completed the checkout
    pub receipt: Option<ReceiptResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub receipt_id: String,
    pub store_name: String,
    pub timestamp: String,
    pub items: Vec<ReceiptItem>,
    pub total_cents: i64,
    pub payment: ReceiptPayment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub title: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayment {
    pub method: String,
    pub amount_cents: i64,
}

/// Full session snapshot for the `state` command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub started_at: String,
    pub stage: CheckoutStatus,
    pub session: Session,
}

fn build_response(state: &SessionState, config: &ConfigState) -> CheckoutResponse {
    state.with_session(|s| {
        let stage = s.stage();
        CheckoutResponse {
            status: stage,
            method: s.method(),
            panel_open: s.checkout.panel_open,
            item_count: s.cart.item_count(),
            total_cents: s.cart.total().cents(),
            bank_details: (stage == CheckoutStatus::AwaitingBankConfirmation)
                .then(|| config.bank.clone()),
            receipt: None,
        }
    })
}

fn build_receipt(session: &Session, config: &ConfigState) -> ReceiptResponse {
    let total_cents = session.cart.total().cents();

    ReceiptResponse {
        receipt_id: Uuid::new_v4().to_string(),
        store_name: config.store_name.clone(),
        timestamp: Utc::now().to_rfc3339(),
        items: session
            .cart
            .items()
            .iter()
            .map(|line| ReceiptItem {
                title: line.title.clone(),
                quantity: line.quantity,
                unit_price_cents: line.price.cents(),
                line_total_cents: line.line_total().cents(),
            })
            .collect(),
        total_cents,
        payment: ReceiptPayment {
            method: session.method().label().to_string(),
            amount_cents: total_cents,
        },
    }
}

/// Dispatches a payment action, attaching a receipt if it completed the
/// checkout.
fn settle(
    state: &mut SessionState,
    config: &ConfigState,
    action: Action,
) -> Result<CheckoutResponse, ApiError> {
    check(state.dispatch(action))?;

    let mut response = build_response(state, config);
    if response.status.is_completed() {
        let receipt = state.with_session(|s| build_receipt(s, config));
        info!(
            receipt_id = %receipt.receipt_id,
            total = %receipt.total_cents,
            method = %receipt.payment.method,
            "Checkout completed"
        );
        response.receipt = Some(receipt);
    }

    Ok(response)
}

/// Gets the checkout panel state.
pub fn get_checkout(state: &SessionState, config: &ConfigState) -> CheckoutResponse {
    debug!("get_checkout command");
    build_response(state, config)
}

/// Shows the cart/checkout panel.
pub fn open_checkout(state: &mut SessionState, config: &ConfigState) -> CheckoutResponse {
    debug!("open_checkout command");
    state.dispatch(Action::OpenCheckout);
    build_response(state, config)
}

/// Hides the panel. A pending bank transfer is abandoned.
pub fn close_checkout(state: &mut SessionState, config: &ConfigState) -> CheckoutResponse {
    debug!("close_checkout command");
    state.dispatch(Action::CloseCheckout);
    build_response(state, config)
}

/// Picks a payment method by name (`cod`, `bank`, `card`, ...).
pub fn select_method(
    state: &mut SessionState,
    config: &ConfigState,
    method: &str,
) -> Result<CheckoutResponse, ApiError> {
    debug!(method = %method, "select_method command");

    let method: PaymentMethod = method.parse()?;
    check(state.dispatch(Action::SelectMethod { method }))?;

    Ok(build_response(state, config))
}

/// "Pay Now".
///
/// ## Returns
/// - Bank transfer: `awaiting_bank_confirmation` with bank details
/// - Cash on delivery / credit card: `completed` with a receipt
/// - Empty cart: `CART_ERROR` "Your cart is empty!"
pub fn pay(state: &mut SessionState, config: &ConfigState) -> Result<CheckoutResponse, ApiError> {
    debug!("pay command");
    settle(state, config, Action::Pay)
}

/// "Confirm Payment" after a bank transfer.
pub fn confirm_payment(
    state: &mut SessionState,
    config: &ConfigState,
) -> Result<CheckoutResponse, ApiError> {
    debug!("confirm_payment command");
    settle(state, config, Action::ConfirmBankTransfer)
}

/// Starts a new order: empty cart, idle, cash on delivery.
pub fn new_order(state: &mut SessionState, config: &ConfigState) -> CheckoutResponse {
    debug!("new_order command");
    state.dispatch(Action::Reset);
    build_response(state, config)
}

/// Serializable snapshot of the whole session.
pub fn snapshot(state: &SessionState) -> SessionSnapshot {
    state.with_session(|s| SessionSnapshot {
        started_at: state.started_at().to_rfc3339(),
        stage: s.stage(),
        session: s.clone(),
    })
}
