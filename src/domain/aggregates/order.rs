//! Order Aggregate
//!
//! Orders are produced by the mock checkout from a cart snapshot. Nothing is
//! charged and nothing leaves the process.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::aggregates::cart::{Cart, CartItem};
use crate::domain::events::{DomainEvent, OrderEvent};
use crate::domain::value_objects::Money;

/// Orders strictly above this subtotal ship for free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 1000;
pub const FLAT_SHIPPING_FEE: i64 = 50;
/// Thai VAT, in percent.
pub const VAT_PERCENT: i64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals { pub subtotal: Money, pub shipping: Money, pub tax: Money, pub total: Money }

impl OrderTotals {
    pub fn for_cart(cart: &Cart) -> Self { Self::for_subtotal(cart.total()) }

    pub fn for_subtotal(subtotal: Money) -> Self {
        let shipping = if subtotal > Money::baht(FREE_SHIPPING_THRESHOLD) { Money::ZERO } else { Money::baht(FLAT_SHIPPING_FEE) };
        let tax = subtotal.percent(Decimal::from(VAT_PERCENT));
        Self { subtotal, shipping, tax, total: subtotal.add(&shipping).add(&tax) }
    }

    pub fn free_shipping(&self) -> bool { self.shipping.is_zero() }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod { #[default] CreditCard, BankTransfer }

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress { pub name: String, pub phone: String, pub address: String, pub district: String, pub province: String, pub postal_code: String }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine { pub product_id: String, pub name: String, pub size: Option<String>, pub color: Option<String>, pub quantity: u32, pub unit_price: Money, pub total: Money }

impl OrderLine {
    fn from_cart_item(item: &CartItem, name: &str) -> Self {
        Self {
            product_id: item.product_id.clone(), name: name.to_string(), size: item.size.clone(), color: item.color.clone(),
            quantity: item.quantity, unit_price: item.price, total: item.line_total(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Order {
    id: String,
    order_number: String,
    email: String,
    ship_to: ShippingAddress,
    payment: PaymentMethod,
    lines: Vec<OrderLine>,
    totals: OrderTotals,
    notes: Option<String>,
    placed_at: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Order {
    /// Builds a placed order from the current cart contents. Line names are
    /// resolved with `name_of` so the order records the shopper's language.
    pub fn place(cart: &Cart, email: impl Into<String>, ship_to: ShippingAddress, payment: PaymentMethod, notes: Option<String>, name_of: impl Fn(&CartItem) -> String) -> Self {
        let id = Uuid::now_v7();
        let placed_at = Utc::now();
        let order_number = format!("TH-{}-{}", placed_at.format("%Y%m%d"), &id.simple().to_string()[24..]);
        let lines = cart.items().iter().map(|i| OrderLine::from_cart_item(i, &name_of(i))).collect();
        let totals = OrderTotals::for_cart(cart);
        let mut order = Self {
            id: id.to_string(), order_number, email: email.into(), ship_to, payment, lines, totals,
            notes: notes.filter(|n| !n.trim().is_empty()), placed_at, events: vec![],
        };
        order.raise_event(DomainEvent::Order(OrderEvent::Placed { order_id: order.id.clone(), order_number: order.order_number.clone(), total: totals.total }));
        order
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn order_number(&self) -> &str { &self.order_number }
    pub fn email(&self) -> &str { &self.email }
    pub fn ship_to(&self) -> &ShippingAddress { &self.ship_to }
    pub fn payment(&self) -> &PaymentMethod { &self.payment }
    pub fn lines(&self) -> &[OrderLine] { &self.lines }
    pub fn totals(&self) -> &OrderTotals { &self.totals }
    pub fn notes(&self) -> Option<&str> { self.notes.as_deref() }
    pub fn placed_at(&self) -> DateTime<Utc> { self.placed_at }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
