//! Per-process storefront state.

use std::sync::Arc;

use crate::catalog::MockCatalog;
use crate::config::StorefrontConfig;
use crate::language::LanguageSetting;
use crate::search::SearchField;
use crate::storage::{FileStore, MemoryStore, Storage};
use crate::store::CartStore;

/// Everything one shopper's session owns. Built once at startup and handed
/// to the presentation layer by reference.
#[derive(Debug)]
pub struct Session {
    pub catalog: Arc<MockCatalog>,
    pub cart: CartStore,
    pub language: LanguageSetting,
    pub search: SearchField,
}

impl Session {
    /// Opens storage per `config`, restores the cart and language, and
    /// seeds the catalog.
    pub fn start(config: &StorefrontConfig) -> Self {
        let storage = match &config.data_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "using file-backed storage");
                Storage::new(FileStore::new(dir))
            }
            None => Storage::new(MemoryStore::new()),
        };
        Self::with_storage(config, storage, MockCatalog::seeded(config.latency()))
    }

    pub fn with_storage(config: &StorefrontConfig, storage: Storage, catalog: MockCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            cart: CartStore::open(storage.clone()),
            language: LanguageSetting::load(storage, config.default_locale),
            search: SearchField::new(Arc::clone(&catalog), config.search_debounce),
            catalog,
        }
    }
}
