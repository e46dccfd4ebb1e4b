//! Aggregates module
pub mod product;
pub mod order;
pub mod cart;

pub use product::{Category, Product};
pub use order::{Order, OrderLine, OrderTotals, PaymentMethod, ShippingAddress};
pub use cart::{Cart, CartError, CartItem};
