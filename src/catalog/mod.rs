//! In-process product catalog with simulated network latency.

mod seed;

use std::time::Duration;

use thiserror::Error;

use crate::domain::aggregates::{Category, Product};
use crate::domain::value_objects::Locale;
use crate::pipeline::matches_query;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(String),
}

/// Delay applied before each kind of catalog call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub by_id: Duration,
    pub by_category: Duration,
    pub search: Duration,
    pub featured: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            by_id: Duration::from_millis(300),
            by_category: Duration::from_millis(400),
            search: Duration::from_millis(600),
            featured: Duration::from_millis(300),
        }
    }
}

impl LatencyProfile {
    pub fn instant() -> Self {
        Self { list: Duration::ZERO, by_id: Duration::ZERO, by_category: Duration::ZERO, search: Duration::ZERO, featured: Duration::ZERO }
    }
}

#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    latency: LatencyProfile,
}

impl MockCatalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>, latency: LatencyProfile) -> Self {
        Self { products, categories, latency }
    }

    /// The demo clothing catalogue: eight products in six categories.
    pub fn seeded(latency: LatencyProfile) -> Self { Self::new(seed::products(), seed::categories(), latency) }

    pub fn categories(&self) -> &[Category] { &self.categories }

    pub async fn products(&self) -> Vec<Product> {
        delay(self.latency.list).await;
        self.products.clone()
    }

    pub async fn product_by_id(&self, id: &str) -> Result<Product, CatalogError> {
        delay(self.latency.by_id).await;
        self.products.iter().find(|p| p.id == id).cloned().ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub async fn products_by_category(&self, category: &str) -> Vec<Product> {
        delay(self.latency.by_category).await;
        self.products.iter().filter(|p| p.category == category).cloned().collect()
    }

    pub async fn search(&self, query: &str, locale: Locale) -> Vec<Product> {
        delay(self.latency.search).await;
        tracing::debug!(%query, %locale, "catalog search");
        self.products.iter().filter(|p| matches_query(p, query, locale)).cloned().collect()
    }

    pub async fn featured(&self) -> Vec<Product> {
        delay(self.latency.featured).await;
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }
}

async fn delay(d: Duration) {
    if !d.is_zero() { tokio::time::sleep(d).await; }
}
