//! # Catalog Commands
//!
//! Product listing and lookup.

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_catalog::Catalog;
use storefront_core::{CatalogItem, ItemId};

use crate::error::ApiError;

/// Product as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub title: String,
    pub price_cents: i64,
    pub image: String,
}

impl From<&CatalogItem> for ProductDto {
    fn from(item: &CatalogItem) -> Self {
        ProductDto {
            id: item.id.to_string(),
            title: item.title.clone(),
            price_cents: item.price.cents(),
            image: item.image.clone(),
        }
    }
}

/// Lists products, optionally filtered by a title search.
pub fn list_products(catalog: &Catalog, query: Option<&str>) -> Vec<ProductDto> {
    debug!(query = ?query, "list_products command");

    catalog
        .search(query.unwrap_or(""))
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

/// Looks up a product by id.
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<CatalogItem, ApiError> {
    catalog
        .get(&ItemId::new(product_id))
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::Money;

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            CatalogItem::new("1", "Cotton Jacket", Money::from_cents(5599), "https://img/1.jpg"),
            CatalogItem::new("2", "Gold Ring", Money::from_cents(16800), "https://img/2.jpg"),
        ])
    }

    #[test]
    fn test_list_products() {
        let all = list_products(&catalog(), None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].price_cents, 5599);

        let rings = list_products(&catalog(), Some("ring"));
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].id, "2");
    }

    #[test]
    fn test_get_unknown_product() {
        let err = get_product(&catalog(), "99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 99");
    }
}
