//! # Validation Module
//!
//! Checks applied to data entering the system from outside (catalog
//! payloads, configuration) before it can reach a cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog loader (storefront-catalog)                          │
//! │  ├── JSON shape (serde)                                                │
//! │  └── THIS MODULE: price / title rules, bad entries are skipped         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: State machine (checkout.rs)                                  │
//! │  └── Quantity ≥ 1, non-empty cart on pay → Rejection, never Err        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price, validate_title};
//! use storefront_core::Money;
//!
//! assert!(validate_price(Money::from_cents(1099)).is_ok());
//! assert!(validate_title("Fjallraven Backpack").is_ok());
//! assert!(validate_title("   ").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CatalogItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest title accepted from a catalog.
pub const MAX_TITLE_LEN: usize = 500;

/// Highest price accepted from a catalog (1,000,000.00).
///
/// `MAX_PRICE × MAX_ITEM_QUANTITY` is about 10^11 cents per line, so a cart
/// total stays exact in `i64` for any realistic number of lines.
pub const MAX_PRICE: Money = Money::from_cents(100_000_000);

/// Validates a product title.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_TITLE_LEN`] characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE.to_string(),
        });
    }

    Ok(())
}

/// Validates an id.
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Runs every rule against a catalog entry.
pub fn validate_catalog_item(item: &CatalogItem) -> ValidationResult<()> {
    validate_id(item.id.as_str())?;
    validate_title(&item.title)?;
    validate_price(item.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Mens Casual Premium Slim Fit T-Shirts").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(validate_title(&"A".repeat(MAX_TITLE_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(10995)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(-1)),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
        assert!(validate_price(MAX_PRICE).is_ok());
        assert_eq!(
            validate_price(Money::parse_decimal("50000000000000000").unwrap()),
            Err(ValidationError::TooLarge {
                field: "price".to_string(),
                max: "1000000.00".to_string()
            })
        );
    }

    #[test]
    fn test_validate_catalog_item() {
        let good = CatalogItem::new("1", "Backpack", Money::from_cents(10995), "https://img/1.jpg");
        assert!(validate_catalog_item(&good).is_ok());

        let blank_id = CatalogItem { id: "  ".into(), ..good.clone() };
        assert!(validate_catalog_item(&blank_id).is_err());

        let negative = CatalogItem {
            price: Money::from_cents(-500),
            ..good
        };
        assert!(validate_catalog_item(&negative).is_err());
    }
}
