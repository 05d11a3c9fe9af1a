//! # Catalog
//!
//! The read-only product list, as the storefront shows it.
//!
//! Built once at startup from whatever a [`CatalogSource`](crate::CatalogSource)
//! returned. Entries failing [`validate_catalog_item`] are dropped, and for
//! duplicate ids the first entry wins, so every id in a `Catalog` is unique.

use std::collections::HashSet;

use tracing::warn;

use storefront_core::validation::validate_catalog_item;
use storefront_core::{CatalogItem, ItemId};

/// Ordered, read-only collection of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, dropping invalid and duplicate entries.
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for item in items {
            if let Err(e) = validate_catalog_item(&item) {
                warn!(item_id = %item.id, error = %e, "Dropping invalid catalog entry");
                continue;
            }
            if !seen.insert(item.id.clone()) {
                warn!(item_id = %item.id, "Dropping duplicate catalog entry");
                continue;
            }
            kept.push(item);
        }

        Catalog { items: kept }
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Case-insensitive title search.
    ///
    /// A blank query matches everything. Results keep catalog order.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_catalog::Catalog;
    /// use storefront_core::{CatalogItem, Money};
    ///
    /// let catalog = Catalog::from_items(vec![
    ///     CatalogItem::new("1", "Slim Fit T-Shirt", Money::from_cents(2230), ""),
    ///     CatalogItem::new("2", "Rain Jacket", Money::from_cents(3999), ""),
    /// ]);
    /// assert_eq!(catalog.search("jacket").len(), 1);
    /// assert_eq!(catalog.search("").len(), 2);
    /// ```
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }

        self.items
            .iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Products in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
