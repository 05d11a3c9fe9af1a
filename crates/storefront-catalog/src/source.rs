//! # Catalog Sources
//!
//! Where the product list comes from.
//!
//! ## Loading Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Startup                                           │
//! │                                                                         │
//! │  load_catalog(&source)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  source.fetch() ──Ok(items)──► Catalog::from_items(items)              │
//! │       │                                                                 │
//! │       └──Err(e)──► warn!(...) ──► Catalog::default()  (empty)          │
//! │                                                                         │
//! │  The storefront still opens with an empty shelf; the cart works.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One request, no retries.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use storefront_core::CatalogItem;

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::wire::parse_products;

/// Public demo endpoint the storefront reads by default.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Default request timeout for [`HttpCatalogSource`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce the product list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short description for logs ("https://...", "/path/products.json").
    fn describe(&self) -> String;

    /// Fetches the raw product list.
    async fn fetch(&self) -> CatalogResult<Vec<CatalogItem>>;
}

// =============================================================================
// HTTP
// =============================================================================

/// GETs a JSON product array from a URL.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Creates a source with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::Client)?;

        Ok(HttpCatalogSource {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> CatalogResult<Vec<CatalogItem>> {
        debug!(url = %self.url, "Fetching catalog");

        let request_error = |source| CatalogError::Request {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        parse_products(&body)
    }
}

// =============================================================================
// File
// =============================================================================

/// Reads a JSON product array from disk (offline demos, tests).
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCatalogSource { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> CatalogResult<Vec<CatalogItem>> {
        debug!(path = %self.path.display(), "Reading catalog file");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        parse_products(&bytes)
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// A fixed list of products.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    items: Vec<CatalogItem>,
}

impl StaticCatalogSource {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        StaticCatalogSource { items }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn describe(&self) -> String {
        format!("static list of {} products", self.items.len())
    }

    async fn fetch(&self) -> CatalogResult<Vec<CatalogItem>> {
        Ok(self.items.clone())
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Fetches the catalog once, treating any failure as an empty catalog.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.fetch().await {
        Ok(items) => {
            let catalog = Catalog::from_items(items);
            info!(source = %source.describe(), products = catalog.len(), "Catalog loaded");
            catalog
        }
        Err(e) => {
            warn!(
                source = %source.describe(),
                error = %e,
                "Catalog unavailable, continuing with an empty catalog"
            );
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use storefront_core::Money;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PRODUCTS: &str = r#"[
        { "id": 1, "title": "Backpack", "price": 109.95, "image": "https://img/1.jpg" },
        { "id": 2, "title": "T-Shirt", "price": 22.3, "image": "https://img/2.jpg" }
    ]"#;

    #[tokio::test]
    async fn test_http_source_fetches_products() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCTS))
            .expect(1)
            .mount(&server)
            .await;

        let source =
            HttpCatalogSource::new(format!("{}/products", server.uri()), DEFAULT_TIMEOUT).unwrap();
        let catalog = load_catalog(&source).await;

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].price, Money::from_cents(10995));
    }

    #[tokio::test]
    async fn test_http_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpCatalogSource::new(server.uri(), DEFAULT_TIMEOUT).unwrap();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, CatalogError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_empty_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = HttpCatalogSource::new(server.uri(), DEFAULT_TIMEOUT).unwrap();
        assert!(load_catalog(&source).await.is_empty());

        let missing = FileCatalogSource::new("/definitely/not/here.json");
        assert!(load_catalog(&missing).await.is_empty());
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(PRODUCTS)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let source = HttpCatalogSource::new(server.uri(), Duration::from_millis(100)).unwrap();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, CatalogError::Request { .. }));
    }

    #[tokio::test]
    async fn test_file_source_reads_products() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PRODUCTS.as_bytes()).unwrap();

        let source = FileCatalogSource::new(file.path());
        let catalog = load_catalog(&source).await;

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[1].title, "T-Shirt");
    }

    #[tokio::test]
    async fn test_static_source_is_validated() {
        let source = StaticCatalogSource::new(vec![
            CatalogItem::new("1", "Good", Money::from_cents(100), ""),
            CatalogItem::new("2", "Bad", Money::from_cents(-100), ""),
        ]);

        let catalog = load_catalog(&source).await;

        assert_eq!(catalog.len(), 1);
    }
}
