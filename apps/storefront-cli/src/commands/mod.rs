//! # Commands Module
//!
//! Operations the shell exposes, one function per command.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product listing and lookup
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── Panel, payment method, pay / confirm, receipt
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &Catalog, query: Option<&str>)
//!
//! // Only needs the session
//! fn remove_from_cart(state: &mut SessionState, product_id: &str)
//!
//! // Needs both
//! fn add_to_cart(catalog: &Catalog, state: &mut SessionState, product_id: &str)
//!
//! // Checkout also reads configuration (bank details, store name)
//! fn pay(state: &mut SessionState, config: &ConfigState)
//! ```
//!
//! Every command returns a serde-serializable DTO or an [`ApiError`](crate::error::ApiError).

pub mod cart;
pub mod catalog;
pub mod checkout;
