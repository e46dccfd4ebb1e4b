//! Thai Storefront
//!
//! State core of a bilingual (Thai/English) clothing storefront.
//!
//! ## Features
//! - Session cart with variant-aware line merging and write-through persistence
//! - Product sorting (price, Thai/English name, featured) and filtering
//! - Best-effort JSON key-value storage (in-memory or file-backed)
//! - Mock product catalog with simulated latency and debounced search
//! - Persisted language preference with localized-text fallback
//! - Mock checkout with form validation, shipping and VAT

use thiserror::Error;

pub mod catalog;
pub mod checkout;
pub mod collation;
pub mod config;
pub mod debounce;
pub mod domain;
pub mod language;
pub mod pipeline;
pub mod search;
pub mod session;
pub mod storage;
pub mod store;

pub use catalog::{CatalogError, LatencyProfile, MockCatalog};
pub use checkout::{Checkout, CheckoutError, CheckoutForm, OrderSummary};
pub use config::{ConfigError, StorefrontConfig};
pub use domain::aggregates::{Cart, CartError, CartItem, Category, Order, PaymentMethod, Product};
pub use domain::value_objects::{Locale, LocalizedText, Money};
pub use language::LanguageSetting;
pub use pipeline::{filter_products, sort_products, ProductFilter, SortKey};
pub use session::Session;
pub use storage::{FileStore, KeyValueStore, MemoryStore, PersistenceError, Storage};
pub use store::CartStore;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
