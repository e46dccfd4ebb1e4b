//! Cart Aggregate
//!
//! A cart is an ordered list of lines plus two derived figures, `total` and
//! `item_count`. The derived figures are private and only ever written by
//! [`Cart::recalculate`], which re-derives both from every line.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use crate::domain::aggregates::product::Product;
use crate::domain::events::{CartEvent, DomainEvent};
use crate::domain::value_objects::{LocalizedText, Money};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
    item_count: u32,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

/// One cart line. Name, price, image and stock flag are snapshots taken when
/// the line was created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_item_id: String,
    #[serde(rename = "id")]
    pub product_id: String,
    pub name: LocalizedText,
    pub price: Money,
    pub image: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: u32,
    pub in_stock: bool,
}

impl CartItem {
    pub fn line_total(&self) -> Money { self.price.multiply(self.quantity) }

    pub fn matches(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.product_id == product_id && self.size.as_deref() == size && self.color.as_deref() == color
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("product {0} is out of stock")]
    OutOfStock(String),
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn total(&self) -> Money { self.total }
    pub fn item_count(&self) -> u32 { self.item_count }
    pub fn line_count(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Adds `quantity` of `product` in the given variant, merging into an
    /// existing line with the same product, size and color. Returns the id of
    /// the line that now holds the product.
    pub fn add_product(&mut self, product: &Product, size: Option<&str>, color: Option<&str>, quantity: u32) -> Result<String, CartError> {
        if !product.is_in_stock() { return Err(CartError::OutOfStock(product.id.clone())); }
        if quantity == 0 { return Err(CartError::InvalidQuantity); }

        let (line_id, event) = if let Some(existing) = self.items.iter_mut().find(|i| i.matches(&product.id, size, color)) {
            let from = existing.quantity;
            existing.quantity = existing.quantity.saturating_add(quantity);
            let line_id = existing.cart_item_id.clone();
            (line_id.clone(), CartEvent::QuantityChanged { line_id, from, to: existing.quantity })
        } else {
            let item = CartItem {
                cart_item_id: Uuid::new_v4().to_string(),
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.primary_image().to_string(),
                size: size.map(str::to_string),
                color: color.map(str::to_string),
                quantity,
                in_stock: product.in_stock,
            };
            let line_id = item.cart_item_id.clone();
            let event = CartEvent::ItemAdded { line_id: line_id.clone(), product_id: item.product_id.clone(), quantity };
            self.items.push(item);
            (line_id, event)
        };
        self.raise_event(DomainEvent::Cart(event));
        self.recalculate();
        Ok(line_id)
    }

    /// Sets a line's quantity, clamping negatives to zero; a zero quantity
    /// removes the line. Returns `false` when no line has `line_id`.
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.cart_item_id == line_id) else { return false };
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if clamped == 0 {
            let removed = self.items.remove(pos);
            self.raise_event(DomainEvent::Cart(CartEvent::ItemRemoved { line_id: removed.cart_item_id, product_id: removed.product_id }));
        } else {
            let item = &mut self.items[pos];
            let from = item.quantity;
            item.quantity = clamped;
            let event = CartEvent::QuantityChanged { line_id: item.cart_item_id.clone(), from, to: clamped };
            self.raise_event(DomainEvent::Cart(event));
        }
        self.recalculate();
        true
    }

    pub fn remove_item(&mut self, line_id: &str) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.cart_item_id == line_id) else { return false };
        let removed = self.items.remove(pos);
        self.raise_event(DomainEvent::Cart(CartEvent::ItemRemoved { line_id: removed.cart_item_id, product_id: removed.product_id }));
        self.recalculate();
        true
    }

    pub fn clear(&mut self) {
        let lines = self.items.len();
        self.items.clear();
        self.recalculate();
        self.raise_event(DomainEvent::Cart(CartEvent::Cleared { lines }));
    }

    pub fn find_line(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> Option<&CartItem> {
        self.items.iter().find(|i| i.matches(product_id, size, color))
    }

    pub fn contains(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.find_line(product_id, size, color).is_some()
    }

    pub fn line_quantity(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> u32 {
        self.find_line(product_id, size, color).map_or(0, |i| i.quantity)
    }

    /// Repairs a cart read back from storage: drops zero-quantity lines and
    /// re-derives the totals. Returns `true` if the stored figures were stale.
    pub fn normalize(&mut self) -> bool {
        let (stored_total, stored_count, stored_lines) = (self.total, self.item_count, self.items.len());
        self.items.retain(|i| i.quantity > 0);
        self.recalculate();
        stored_total != self.total || stored_count != self.item_count || stored_lines != self.items.len()
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }

    fn recalculate(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
        self.item_count = self.items.iter().fold(0u32, |acc, i| acc.saturating_add(i.quantity));
    }
}
