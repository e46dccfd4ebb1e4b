//! Session cart with write-through persistence.

use crate::domain::aggregates::{Cart, CartError, CartItem, Product};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::Money;
use crate::storage::Storage;

/// Storage key holding the cart snapshot.
pub const CART_KEY: &str = "cart";

/// Owns the session's [`Cart`]. Every mutation re-derives the totals and
/// writes the whole snapshot under [`CART_KEY`]; storage failures are logged
/// by [`Storage`] and never surface here, so the in-memory cart stays
/// authoritative for the rest of the session.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    storage: Storage,
}

impl CartStore {
    /// An empty cart bound to `storage`. Call [`CartStore::load`] to restore.
    pub fn new(storage: Storage) -> Self { Self { cart: Cart::new(), storage } }

    /// Creates the store and restores any persisted cart.
    pub fn open(storage: Storage) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Replaces the in-memory cart with the persisted snapshot, or with an
    /// empty cart when nothing usable is stored.
    pub fn load(&mut self) {
        self.cart = match self.storage.get::<Cart>(CART_KEY) {
            Some(mut cart) => {
                if cart.normalize() {
                    tracing::warn!("stored cart totals were stale; recomputed from items");
                }
                cart
            }
            None => Cart::new(),
        };
        tracing::debug!(lines = self.cart.line_count(), items = self.cart.item_count(), "cart loaded");
    }

    pub fn add(&mut self, product: &Product, size: Option<&str>, color: Option<&str>, quantity: u32) -> Result<String, CartError> {
        let line_id = self.cart.add_product(product, size, color, quantity).inspect_err(|error| {
            tracing::info!(product_id = %product.id, %error, "add to cart rejected");
        })?;
        self.commit();
        Ok(line_id)
    }

    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) {
        if self.cart.update_quantity(line_id, quantity) {
            self.commit();
        }
    }

    pub fn remove(&mut self, line_id: &str) {
        if self.cart.remove_item(line_id) {
            self.commit();
        }
    }

    /// Empties the cart and deletes the stored snapshot.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.log_events();
        self.storage.remove(CART_KEY);
    }

    pub fn cart(&self) -> &Cart { &self.cart }
    pub fn items(&self) -> &[CartItem] { self.cart.items() }
    pub fn total(&self) -> Money { self.cart.total() }
    pub fn item_count(&self) -> u32 { self.cart.item_count() }
    pub fn is_empty(&self) -> bool { self.cart.is_empty() }

    pub fn is_in_cart(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.cart.contains(product_id, size, color)
    }

    pub fn find_line(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> Option<&CartItem> {
        self.cart.find_line(product_id, size, color)
    }

    pub fn line_quantity(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> u32 {
        self.cart.line_quantity(product_id, size, color)
    }

    fn commit(&mut self) {
        self.log_events();
        self.storage.set(CART_KEY, &self.cart);
    }

    fn log_events(&mut self) {
        for event in self.cart.take_events() {
            if let DomainEvent::Cart(event) = event {
                tracing::debug!(?event, total = %self.cart.total(), items = self.cart.item_count(), "cart changed");
            }
        }
    }
}
