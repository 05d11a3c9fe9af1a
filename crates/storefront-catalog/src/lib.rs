//! # storefront-catalog: Product Catalog Sources
//!
//! Supplies the read-only product list the storefront sells from. The cart
//! never talks to the network; this crate does, once, at startup.
//!
//! ## Modules
//!
//! - [`source`] - `CatalogSource` trait, HTTP / file / in-memory sources, `load_catalog`
//! - [`catalog`] - The validated, de-duplicated `Catalog`
//! - [`wire`] - JSON payload decoding
//! - [`error`] - `CatalogError`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use storefront_catalog::{load_catalog, HttpCatalogSource, DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT};
//!
//! # async fn run() -> Result<(), storefront_catalog::CatalogError> {
//! let source = HttpCatalogSource::new(DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT)?;
//! let catalog = load_catalog(&source).await; // empty on failure, never Err
//! println!("{} products", catalog.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod source;
pub mod wire;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use source::{
    load_catalog, CatalogSource, FileCatalogSource, HttpCatalogSource, StaticCatalogSource,
    DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT,
};
