//! # Cart Types
//!
//! The cart as submitted by the browser: `{ "cart": [{ name, price, quantity }] }`.

use crate::currency::Currency;
use crate::error::{PaymentError, PaymentResult};
use crate::order::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchasable item in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Display name
    pub name: String,

    /// Unit price in currency units (dollars), e.g. `19.99`
    pub price: Decimal,

    /// Quantity
    pub quantity: u32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Check the item constraints: non-empty name, non-negative price, positive quantity
    pub fn validate(&self) -> PaymentResult<()> {
        if self.name.trim().is_empty() {
            return Err(PaymentError::InvalidRequest(
                "Cart item name must not be empty".to_string(),
            ));
        }
        if self.price < Decimal::ZERO {
            return Err(PaymentError::InvalidPrice {
                message: format!("{}: price {} is negative", self.name, self.price),
            });
        }
        if self.quantity == 0 {
            return Err(PaymentError::InvalidRequest(format!(
                "{}: quantity must be at least 1",
                self.name
            )));
        }
        Ok(())
    }
}

/// Ordered sequence of cart items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builder: append an item
    pub fn with_item(mut self, item: CartItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Convert every item into a provider line item, preserving order.
    ///
    /// Fails on the first invalid item; never drops or reorders items.
    pub fn line_items(&self, currency: Currency) -> PaymentResult<Vec<LineItem>> {
        self.items
            .iter()
            .map(|item| LineItem::from_cart_item(item, currency))
            .collect()
    }
}

/// Request body posted by the browser cart
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequestBody {
    pub cart: Cart,
}

impl CheckoutRequestBody {
    /// Parse the raw request body
    pub fn from_json(body: &str) -> PaymentResult<Self> {
        serde_json::from_str(body).map_err(|e| {
            PaymentError::InvalidRequest(format!("Malformed checkout request: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_request_body() {
        let body = r#"{"cart":[{"name":"Mug","price":19.99,"quantity":2},{"name":"Tee","price":"25","quantity":1}]}"#;
        let request = CheckoutRequestBody::from_json(body).unwrap();

        assert_eq!(request.cart.len(), 2);
        assert_eq!(request.cart.items[0], CartItem::new("Mug", dec!(19.99), 2));
        assert_eq!(request.cart.items[1].price, dec!(25));
    }

    #[test]
    fn test_parse_keeps_exact_half_cent() {
        let body = r#"{"cart":[{"name":"Sticker","price":0.005,"quantity":1}]}"#;
        let request = CheckoutRequestBody::from_json(body).unwrap();

        assert_eq!(request.cart.items[0].price, dec!(0.005));
    }

    #[test]
    fn test_missing_cart_is_rejected() {
        let err = CheckoutRequestBody::from_json(r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, PaymentError::InvalidRequest(_)));

        let err = CheckoutRequestBody::from_json("not json").unwrap_err();
        assert!(matches!(err, PaymentError::InvalidRequest(_)));
    }

    #[test]
    fn test_negative_quantity_is_a_parse_error() {
        let body = r#"{"cart":[{"name":"Mug","price":1,"quantity":-1}]}"#;
        assert!(CheckoutRequestBody::from_json(body).is_err());
    }

    #[test]
    fn test_item_validation() {
        assert!(CartItem::new("Mug", dec!(1), 1).validate().is_ok());
        assert!(CartItem::new("Free", dec!(0), 1).validate().is_ok());
        assert!(CartItem::new("  ", dec!(1), 1).validate().is_err());
        assert!(CartItem::new("Mug", dec!(1), 0).validate().is_err());
        assert!(matches!(
            CartItem::new("Mug", dec!(-0.01), 1).validate(),
            Err(PaymentError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_line_items_preserve_order_and_count() {
        let cart = Cart::new()
            .with_item(CartItem::new("A", dec!(1.50), 3))
            .with_item(CartItem::new("B", dec!(19.99), 1))
            .with_item(CartItem::new("C", dec!(0.10), 7));

        let items = cart.line_items(Currency::USD).unwrap();

        assert_eq!(items.len(), cart.len());
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        let amounts: Vec<_> = items.iter().map(|i| i.unit_amount).collect();
        assert_eq!(amounts, [150, 1999, 10]);
        let quantities: Vec<_> = items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, [3, 1, 7]);
    }

    #[test]
    fn test_empty_cart_has_no_line_items() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.line_items(Currency::USD).unwrap().is_empty());
    }
}
