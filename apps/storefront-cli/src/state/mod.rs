//! # Shell State
//!
//! Three focused pieces of state instead of one big struct; each command
//! takes only the pieces it needs.
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │    Catalog       │ │   SessionState   │ │    ConfigState       │
//! │  (read-only)     │ │  • Cart          │ │  • Store name        │
//! │                  │ │  • Checkout      │ │  • Currency symbol   │
//! │                  │ │  • Started at    │ │  • Bank details      │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```

mod config;
mod session;

pub use config::{BankDetails, ConfigError, ConfigState, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use session::SessionState;

use storefront_catalog::Catalog;

/// Everything the shell loop owns.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub session: SessionState,
    pub config: ConfigState,
}

impl AppState {
    pub fn new(catalog: Catalog, config: ConfigState) -> Self {
        AppState {
            catalog,
            session: SessionState::new(),
            config,
        }
    }
}
