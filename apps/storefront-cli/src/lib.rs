//! # Storefront Shell Library
//!
//! Core library for the `storefront` terminal application.
//!
//! ## Module Organization
//! ```text
//! storefront_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState + exports
//! │   ├── session.rs  ◄─── Session owner (dispatch only)
//! │   └── config.rs   ◄─── Layered configuration
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Product listing
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── checkout.rs ◄─── Payment flow + receipts
//! ├── shell.rs        ◄─── Line parser, loop and rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppState, ConfigState};
use storefront_catalog::{load_catalog, CatalogSource, FileCatalogSource, HttpCatalogSource};

/// Command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "storefront", version, about = "Browse a product catalog, fill a cart and check out")]
pub struct Cli {
    /// Configuration file (defaults to ./storefront.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read products from a JSON file instead of the catalog URL
    #[arg(long, value_name = "FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Product list endpoint
    #[arg(long, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Catalog request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Applies flag overrides on top of the loaded configuration.
    ///
    /// `--catalog-url` wins over a configured catalog file.
    pub fn apply(&self, config: &mut ConfigState) {
        if let Some(url) = &self.catalog_url {
            config.catalog_url = url.clone();
            config.catalog_file = None;
        }
        if let Some(path) = &self.catalog_file {
            config.catalog_file = Some(path.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout_secs = secs;
        }
    }
}

/// Runs the shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG override)                     │
/// │  2. Load Configuration (defaults → file → env → flags)                 │
/// │  3. Fetch Catalog once (failure → empty catalog, warning logged)       │
/// │  4. Run the shell loop until `quit` / end of input                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    let mut config = ConfigState::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut config);
    config.validate().context("validating configuration")?;

    info!(store = %config.store_name, "Starting storefront");

    let source = catalog_source(&config)?;
    let catalog = load_catalog(source.as_ref()).await;

    let mut app = AppState::new(catalog, config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run_shell(&mut app, stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

/// Picks the catalog source the configuration points at.
pub fn catalog_source(config: &ConfigState) -> anyhow::Result<Box<dyn CatalogSource>> {
    match &config.catalog_file {
        Some(path) => Ok(Box::new(FileCatalogSource::new(path))),
        None => {
            let source = HttpCatalogSource::new(&config.catalog_url, config.request_timeout())?;
            Ok(Box::new(source))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: INFO, DEBUG for storefront crates
///
/// Logs go to stderr; stdout belongs to the shell.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
