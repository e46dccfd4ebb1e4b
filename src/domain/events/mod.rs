//! Domain events
use crate::domain::value_objects::Money;

#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Cart(CartEvent),
    Order(OrderEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartEvent {
    ItemAdded { line_id: String, product_id: String, quantity: u32 },
    QuantityChanged { line_id: String, from: u32, to: u32 },
    ItemRemoved { line_id: String, product_id: String },
    Cleared { lines: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrderEvent {
    Placed { order_id: String, order_number: String, total: Money },
}
