//! Mock checkout: shopper details validation and order placement.
//!
//! No payment is taken. Placing an order waits for a simulated processing
//! delay, snapshots the cart into an [`Order`] and clears the cart.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::aggregates::{Order, PaymentMethod, ShippingAddress};
use crate::domain::value_objects::Locale;
use crate::store::CartStore;

pub use crate::domain::aggregates::OrderTotals as OrderSummary;

pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,
    #[error("checkout details are invalid: {0}")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    #[validate(custom = "required")]
    pub first_name: String,
    #[validate(custom = "required")]
    pub last_name: String,
    #[validate(custom = "required", email)]
    pub email: String,
    #[validate(custom = "thai_phone")]
    pub phone: String,
    #[validate(custom = "required")]
    pub address: String,
    #[validate(custom = "required")]
    pub district: String,
    #[validate(custom = "required")]
    pub province: String,
    #[validate(custom = "required")]
    pub postal_code: String,
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub notes: String,
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// `+66` or `0` followed by 8 or 9 digits, ignoring spaces and dashes.
pub fn is_valid_thai_phone(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    let digits = cleaned.strip_prefix("+66").or_else(|| cleaned.strip_prefix('0'));
    digits.is_some_and(|d| (8..=9).contains(&d.len()) && d.chars().all(|c| c.is_ascii_digit()))
}

fn thai_phone(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if !is_valid_thai_phone(value) {
        return Err(ValidationError::new("invalid_phone"));
    }
    Ok(())
}

impl CheckoutForm {
    /// Runs the field rules plus the card-details rule for card payments.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.payment_method == PaymentMethod::CreditCard {
            for (field, value) in [("card_number", &self.card_number), ("expiry_date", &self.expiry_date), ("cvv", &self.cvv)] {
                if let Err(e) = required(value) {
                    errors.add(field, e);
                }
            }
        }
        if errors.errors().is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn shipping_address(&self) -> ShippingAddress {
        ShippingAddress {
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            district: self.district.trim().to_string(),
            province: self.province.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Checkout {
    processing_delay: Duration,
}

impl Default for Checkout {
    fn default() -> Self { Self::new(DEFAULT_PROCESSING_DELAY) }
}

impl Checkout {
    pub fn new(processing_delay: Duration) -> Self { Self { processing_delay } }

    pub fn summary(cart: &CartStore) -> OrderSummary { OrderSummary::for_cart(cart.cart()) }

    /// Places an order for everything in `cart`. On success the cart is
    /// cleared; on any error it is left untouched.
    pub async fn place_order(&self, cart: &mut CartStore, form: &CheckoutForm, locale: Locale) -> Result<Order, CheckoutError> {
        if cart.is_empty() { return Err(CheckoutError::EmptyCart); }
        form.check()?;
        tokio::time::sleep(self.processing_delay).await;

        let notes = Some(form.notes.clone());
        let mut order = Order::place(cart.cart(), form.email.trim(), form.shipping_address(), form.payment_method.clone(), notes, |item| {
            item.name.get(locale).to_string()
        });
        for event in order.take_events() {
            tracing::info!(?event, "order placed");
        }
        cart.clear();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "สมชาย".into(),
            last_name: "ใจดี".into(),
            email: "somchai@example.com".into(),
            phone: "081-234-5678".into(),
            address: "99 ถนนสุขุมวิท".into(),
            district: "วัฒนา".into(),
            province: "กรุงเทพมหานคร".into(),
            postal_code: "10110".into(),
            payment_method: PaymentMethod::BankTransfer,
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_thai_phone_rules() {
        assert!(is_valid_thai_phone("0812345678"));
        assert!(is_valid_thai_phone("+66 81 234 5678"));
        assert!(is_valid_thai_phone("02-123-4567"));
        assert!(!is_valid_thai_phone("812345678"));
        assert!(!is_valid_thai_phone("08123"));
        assert!(!is_valid_thai_phone("08x2345678"));
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().check().is_ok());
    }

    #[test]
    fn test_blank_and_malformed_fields_reported() {
        let form = CheckoutForm { first_name: "   ".into(), email: "not-an-email".into(), phone: "12345".into(), ..valid_form() };
        let errors = form.check().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
        assert!(!fields.contains_key("province"));
    }

    #[test]
    fn test_card_fields_required_for_card_payment() {
        let form = CheckoutForm { payment_method: PaymentMethod::CreditCard, ..valid_form() };
        let errors = form.check().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("card_number"));
        assert!(fields.contains_key("cvv"));

        let paid = CheckoutForm { card_number: "4111111111111111".into(), expiry_date: "12/28".into(), cvv: "123".into(), ..form };
        assert!(paid.check().is_ok());
    }
}
