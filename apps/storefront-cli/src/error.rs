//! # API Error Type
//!
//! Error returned by the shell's command functions.
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rejection (core)                   ApiError                            │
//! │  ─────────────────                  ────────                            │
//! │  QuantityBelowMinimum ────────────► VALIDATION_ERROR                    │
//! │  QuantityAboveMaximum ────────────► VALIDATION_ERROR                    │
//! │  PriceOutOfRange ─────────────────► CART_ERROR                          │
//! │  UnknownItem ─────────────────────► NOT_FOUND                           │
//! │  EmptyCart ───────────────────────► CART_ERROR                          │
//! │  CheckoutCompleted ───────────────► CHECKOUT_ERROR                      │
//! │  PaymentPending ──────────────────► CHECKOUT_ERROR                      │
//! │  NothingToConfirm ────────────────► CHECKOUT_ERROR                      │
//! │                                                                         │
//! │  ValidationError (core) ──────────► VALIDATION_ERROR                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use storefront_core::{Rejection, ValidationError};

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CART_ERROR",
///   "message": "Your cart is empty!"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product or cart line
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation refused
    CartError,

    /// Checkout step out of order
    CheckoutError,

    /// Unknown shell command
    UnknownCommand,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    /// Creates a checkout error.
    pub fn checkout(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CheckoutError, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts reducer rejections to API errors.
impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        let message = rejection.to_string();
        match rejection {
            Rejection::QuantityBelowMinimum { .. } | Rejection::QuantityAboveMaximum { .. } => {
                ApiError::validation(message)
            }
            Rejection::PriceOutOfRange { .. } => ApiError::cart(message),
            Rejection::UnknownItem { .. } => ApiError::new(ErrorCode::NotFound, message),
            Rejection::EmptyCart => ApiError::cart(message),
            Rejection::CheckoutCompleted
            | Rejection::PaymentPending
            | Rejection::NothingToConfirm { .. } => ApiError::checkout(message),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::CheckoutStatus;

    #[test]
    fn test_rejection_mapping() {
        let err = ApiError::from(Rejection::EmptyCart);
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Your cart is empty!");

        let err = ApiError::from(Rejection::NothingToConfirm {
            status: CheckoutStatus::Idle,
        });
        assert_eq!(err.code, ErrorCode::CheckoutError);

        let err = ApiError::from(Rejection::QuantityBelowMinimum { requested: 0 });
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ApiError::from(Rejection::QuantityAboveMaximum {
            requested: 5_000_000_000,
            max: 999,
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Quantity cannot exceed 999 (requested 5000000000)");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", "42");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }
}
