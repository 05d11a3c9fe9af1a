//! # Wire Format
//!
//! Decodes the product list served by the catalog endpoint:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
//!     "price": 109.95,
//!     "description": "...",
//!     "category": "men's clothing",
//!     "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
//!     "rating": { "rate": 3.9, "count": 120 }
//!   }
//! ]
//! ```
//!
//! Only `id`, `title`, `price` and `image` are kept; anything else is
//! ignored. Each entry is decoded on its own, so one malformed product is
//! skipped (with a warning) instead of discarding the whole list.
//!
//! Prices are read from the number's textual form (`"109.95"`), which
//! [`Money::parse_decimal_rounded`] turns into cents without touching `f64`.
//! A price with fractions of a cent (`1.999`) is rounded half-up to the
//! nearest cent and logged.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use storefront_core::{CatalogItem, ItemId, Money, ValidationError};

use crate::error::CatalogResult;

/// Ids arrive as numbers from the public API and as strings from
/// hand-written files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

impl From<WireId> for ItemId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => ItemId::from(n),
            WireId::Text(s) => ItemId::from(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Number(serde_json::Number),
    Text(String),
}

impl WirePrice {
    fn text(&self) -> String {
        match self {
            WirePrice::Number(n) => n.to_string(),
            WirePrice::Text(s) => s.clone(),
        }
    }

    fn to_money(&self) -> Result<Money, ValidationError> {
        let text = self.text();
        let price = Money::parse_decimal_rounded(&text)?;

        if Money::parse_decimal(&text).is_err() {
            warn!(raw = %text.trim(), rounded = %price, "Rounded sub-cent catalog price");
        }
        Ok(price)
    }
}

#[derive(Debug, Deserialize)]
struct WireProduct {
    id: WireId,
    title: String,
    price: WirePrice,
    #[serde(default)]
    image: String,
}

impl WireProduct {
    fn into_catalog_item(self) -> Result<CatalogItem, ValidationError> {
        let price = self.price.to_money()?;
        Ok(CatalogItem::new(self.id, self.title, price, self.image))
    }
}

/// Decodes a product-list payload.
///
/// ## Returns
/// - `Err` only if the payload is not a JSON array at all
/// - `Ok(items)` otherwise, with undecodable entries dropped
pub fn parse_products(bytes: &[u8]) -> CatalogResult<Vec<CatalogItem>> {
    let entries: Vec<Value> = serde_json::from_slice(bytes)?;
    let mut items = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let product = match serde_json::from_value::<WireProduct>(entry) {
            Ok(product) => product,
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed catalog entry");
                continue;
            }
        };

        match product.into_catalog_item() {
            Ok(item) => items.push(item),
            Err(e) => warn!(index, error = %e, "Skipping catalog entry with invalid price"),
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts ",
            "price": 22.3,
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SL1500_.jpg"
        },
        { "id": "sku-7", "title": "Sticker", "price": "0.50" },
        { "id": 8, "title": "Integer price", "price": 10 }
    ]"#;

    #[test]
    fn test_parse_sample_payload() {
        let items = parse_products(SAMPLE.as_bytes()).unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].id, ItemId::from("1"));
        assert_eq!(items[0].price.cents(), 10995);
        assert_eq!(items[1].price.cents(), 2230);
        assert_eq!(items[2].id, ItemId::from("sku-7"));
        assert_eq!(items[2].price.cents(), 50);
        assert_eq!(items[2].image, "");
        assert_eq!(items[3].price.cents(), 1000);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let payload = r#"[
            { "id": 1, "title": "Good", "price": 5.5 },
            { "id": 2, "title": "No price" },
            { "id": 3, "title": "Sub-cent price", "price": 1.999 },
            { "id": 4, "title": "Text price", "price": "cheap" },
            "not even an object",
            { "id": 5, "title": "Also good", "price": 2.25 }
        ]"#;

        let items = parse_products(payload.as_bytes()).unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_sub_cent_prices_are_rounded() {
        let payload = r#"[
            { "id": 1, "title": "Up", "price": 1.999 },
            { "id": 2, "title": "Down", "price": 1.994 },
            { "id": 3, "title": "Half", "price": "0.125" }
        ]"#;

        let items = parse_products(payload.as_bytes()).unwrap();

        let cents: Vec<i64> = items.iter().map(|i| i.price.cents()).collect();
        assert_eq!(cents, vec![200, 199, 13]);
    }

    #[test]
    fn test_non_array_payload_is_an_error() {
        assert!(parse_products(br#"{"products": []}"#).is_err());
        assert!(parse_products(b"<html>502 Bad Gateway</html>").is_err());
        assert!(parse_products(b"[]").unwrap().is_empty());
    }
}
