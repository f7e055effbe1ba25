//! # Order Types
//!
//! Line items, the provider-neutral session request, and the session
//! handed back by the provider.

use crate::cart::{Cart, CartItem};
use crate::currency::Currency;
use crate::error::{PaymentError, PaymentResult};
use crate::strategy::CheckoutUrls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A provider-facing line item, priced in minor units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name shown on the hosted checkout page
    pub name: String,

    /// Currency of `unit_amount`
    pub currency: Currency,

    /// Unit price in the smallest currency unit (cents for USD)
    pub unit_amount: i64,

    /// Quantity
    pub quantity: u32,
}

impl LineItem {
    /// Derive a line item from a cart item
    pub fn from_cart_item(item: &CartItem, currency: Currency) -> PaymentResult<Self> {
        item.validate()?;
        Ok(Self {
            name: item.name.clone(),
            currency,
            unit_amount: currency.to_minor_units(item.price)?,
            quantity: item.quantity,
        })
    }

    /// Calculate the total price for this line item, in minor units
    pub fn total(&self) -> i64 {
        self.unit_amount.saturating_mul(i64::from(self.quantity))
    }
}

/// Payment methods offered on the hosted page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    #[default]
    Card,
}

impl PaymentMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::Card => "card",
        }
    }
}

/// Checkout mode. Only one-time payments are created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    #[default]
    Payment,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
        }
    }
}

/// Everything a provider needs to create one hosted checkout session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSessionRequest {
    /// Per-invocation id; doubles as the provider idempotency key
    pub request_id: String,

    pub line_items: Vec<LineItem>,

    pub payment_method_types: Vec<PaymentMethodType>,

    pub mode: CheckoutMode,

    pub success_url: String,

    pub cancel_url: String,
}

impl CheckoutSessionRequest {
    /// Build a card-only, one-time payment request for a cart.
    ///
    /// An empty cart is rejected here, before any provider call.
    pub fn for_cart(
        cart: &Cart,
        urls: &CheckoutUrls,
        request_id: impl Into<String>,
    ) -> PaymentResult<Self> {
        if cart.is_empty() {
            return Err(PaymentError::InvalidRequest(
                "Cart has no items".to_string(),
            ));
        }

        Ok(Self {
            request_id: request_id.into(),
            line_items: cart.line_items(Currency::USD)?,
            payment_method_types: vec![PaymentMethodType::Card],
            mode: CheckoutMode::Payment,
            success_url: urls.success_url(),
            cancel_url: urls.cancel_url(),
        })
    }

    /// Order total in minor units
    pub fn total(&self) -> i64 {
        self.line_items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.total()))
    }

    /// Number of units across all line items
    pub fn item_count(&self) -> u32 {
        self.line_items
            .iter()
            .fold(0_u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Currency of the request (every line item shares it)
    pub fn currency(&self) -> Currency {
        self.line_items
            .first()
            .map(|item| item.currency)
            .unwrap_or_default()
    }
}

/// A checkout session created by a payment provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's opaque session ID
    pub id: String,

    /// Provider name (e.g., "stripe")
    pub provider: String,

    /// Hosted checkout page URL, when the provider returns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// When the session expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CheckoutSession {
    pub fn new(id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            url: None,
            expires_at: None,
        }
    }

    /// Builder: set the hosted page URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_cart() -> Cart {
        Cart::new()
            .with_item(CartItem::new("Poster", dec!(19.99), 2))
            .with_item(CartItem::new("Sticker", dec!(0.005), 1))
    }

    #[test]
    fn test_line_item_from_cart_item() {
        let item = LineItem::from_cart_item(&CartItem::new("Poster", dec!(19.99), 3), Currency::USD)
            .unwrap();

        assert_eq!(item.name, "Poster");
        assert_eq!(item.currency, Currency::USD);
        assert_eq!(item.unit_amount, 1999);
        assert_eq!(item.quantity, 3);
        assert_eq!(item.total(), 5997);
    }

    #[test]
    fn test_invalid_cart_item_is_rejected() {
        let err = LineItem::from_cart_item(&CartItem::new("", dec!(1), 1), Currency::USD)
            .unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_request_for_cart() {
        let urls = CheckoutUrls::new("https://shop.example.com");
        let request = CheckoutSessionRequest::for_cart(&sample_cart(), &urls, "req_1").unwrap();

        assert_eq!(request.request_id, "req_1");
        assert_eq!(request.line_items.len(), 2);
        assert_eq!(request.line_items[1].unit_amount, 1);
        assert_eq!(request.payment_method_types, vec![PaymentMethodType::Card]);
        assert_eq!(request.mode, CheckoutMode::Payment);
        assert_eq!(request.success_url, "https://shop.example.com/?success=true");
        assert_eq!(request.cancel_url, "https://shop.example.com/?canceled=true");
        assert_eq!(request.total(), 3999);
        assert_eq!(request.item_count(), 3);
        assert_eq!(request.currency(), Currency::USD);
    }

    #[test]
    fn test_empty_cart_rejected_before_provider() {
        let urls = CheckoutUrls::new("https://shop.example.com");
        let err = CheckoutSessionRequest::for_cart(&Cart::new(), &urls, "req_2").unwrap_err();

        assert!(matches!(err, PaymentError::InvalidRequest(_)));
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(PaymentMethodType::Card.as_str(), "card");
        assert_eq!(CheckoutMode::Payment.as_str(), "payment");
    }

    #[test]
    fn test_checkout_session_builder() {
        let session = CheckoutSession::new("cs_test_123", "stripe")
            .with_url("https://checkout.stripe.com/c/pay/cs_test_123");

        assert_eq!(session.id, "cs_test_123");
        assert!(session.url.is_some());
        assert!(session.expires_at.is_none());
    }
}
