//! # pay-core
//!
//! Core types and traits for the cart checkout function.
//!
//! This crate provides:
//! - `Cart` and `CartItem`, the browser's cart payload
//! - `LineItem`, `CheckoutSessionRequest` and `CheckoutSession` for the checkout flow
//! - `PaymentStrategy`, the trait a payment provider implements
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{CheckoutRequestBody, CheckoutSessionRequest, CheckoutUrls};
//!
//! let body = CheckoutRequestBody::from_json(raw_body)?;
//! let urls = CheckoutUrls::new("https://shop.example.com");
//! let request = CheckoutSessionRequest::for_cart(&body.cart, &urls, request_id)?;
//!
//! let session = strategy.create_checkout_session(&request).await?;
//! // Hand session.id back to the browser
//! ```

pub mod cart;
pub mod currency;
pub mod error;
pub mod order;
pub mod strategy;

// Re-exports for convenience
pub use cart::{Cart, CartItem, CheckoutRequestBody};
pub use currency::Currency;
pub use error::{PaymentError, PaymentResult};
pub use order::{
    CheckoutMode, CheckoutSession, CheckoutSessionRequest, LineItem, PaymentMethodType,
};
pub use strategy::{BoxedPaymentStrategy, CheckoutUrls, PaymentStrategy};
