//! Debounced catalog search for a single search box.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::catalog::MockCatalog;
use crate::debounce::Debouncer;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::Locale;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub locale: Locale,
    pub products: Vec<Product>,
}

/// Feeds keystrokes into a [`Debouncer`] and publishes the latest completed
/// search on a watch channel.
#[derive(Debug)]
pub struct SearchField {
    catalog: Arc<MockCatalog>,
    debouncer: Debouncer,
    results: watch::Sender<SearchResults>,
}

impl SearchField {
    pub fn new(catalog: Arc<MockCatalog>, window: Duration) -> Self {
        let (results, _) = watch::channel(SearchResults::default());
        Self { catalog, debouncer: Debouncer::new(window), results }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchResults> { self.results.subscribe() }

    pub fn latest(&self) -> SearchResults { self.results.borrow().clone() }

    pub fn is_pending(&self) -> bool { self.debouncer.is_pending() }

    /// Records new input. The catalog is queried once the input has been
    /// idle for the debounce window; earlier pending input is discarded.
    pub fn input(&mut self, query: impl Into<String>, locale: Locale) {
        let query = query.into();
        let catalog = Arc::clone(&self.catalog);
        let results = self.results.clone();
        self.debouncer.call(async move {
            let products = catalog.search(&query, locale).await;
            tracing::debug!(%query, hits = products.len(), "search finished");
            results.send_replace(SearchResults { query, locale, products });
        });
    }
}
