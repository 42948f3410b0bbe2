// Product catalog search against the backend, with keystroke debouncing
//
// The editor fires a search per keystroke; only the one that survives the
// quiet period reaches the network. A superseded search resolves to `None`
// so its results can never be applied to a row.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::super::models::Product;
use crate::config::{ApiConfig, LookupConfig};
use crate::core::{AppError, Result};

/// Free-text product search. The trait is the seam between the editor and
/// the network; tests substitute an in-memory catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<Product>>;
}

/// Catalog search backed by `/master-data/products/`.
pub struct ProductSearchClient {
    client: Client,
    api: ApiConfig,
    page_size: u32,
}

impl ProductSearchClient {
    pub fn new(api: &ApiConfig, lookup: &LookupConfig) -> Result<Self> {
        let client = Client::builder().timeout(api.timeout()).build()?;

        Ok(Self {
            client,
            api: api.clone(),
            page_size: lookup.page_size,
        })
    }
}

// The backend paginates list endpoints; older deployments return a bare
// array. Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductListResponse {
    Paginated { results: Vec<Product> },
    Plain(Vec<Product>),
}

impl ProductListResponse {
    fn into_products(self) -> Vec<Product> {
        match self {
            ProductListResponse::Paginated { results } => results,
            ProductListResponse::Plain(products) => products,
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductSearchClient {
    async fn search(&self, term: &str) -> Result<Vec<Product>> {
        let url = self.api.endpoint("/master-data/products/");
        let page_size = self.page_size.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("search", term), ("page_size", page_size.as_str())])
            .send()
            .await
            .map_err(|e| AppError::api(format!("Product search failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::api(format!(
                "Product search returned {}: {}",
                status, body
            )));
        }

        let products = response
            .json::<ProductListResponse>()
            .await
            .map_err(|e| AppError::api(format!("Failed to parse product search response: {}", e)))?
            .into_products();

        tracing::debug!(term, results = products.len(), "product search completed");
        Ok(products)
    }
}

/// Debounce wrapper around a [`ProductCatalog`].
///
/// Each call bumps a generation counter and waits out the quiet period;
/// if another call arrived meanwhile, the older one returns `Ok(None)`
/// without touching the catalog.
pub struct DebouncedSearch<C> {
    catalog: Arc<C>,
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl<C: ProductCatalog> DebouncedSearch<C> {
    pub fn new(catalog: Arc<C>, delay: Duration) -> Self {
        Self {
            catalog,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run `term` through the debounce window.
    ///
    /// Returns `Ok(None)` when a newer keystroke superseded this one, and
    /// `Ok(Some(vec![]))` for blank input without hitting the network.
    pub async fn search(&self, term: &str) -> Result<Option<Vec<Product>>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) != my_generation {
            tracing::trace!(term, "search superseded during debounce window");
            return Ok(None);
        }

        self.catalog.search(term).await.map(Some)
    }
}

impl<C> Clone for DebouncedSearch<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            delay: self.delay,
            generation: Arc::clone(&self.generation),
        }
    }
}
