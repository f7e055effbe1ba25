//! # Payment Strategy Trait
//!
//! The narrow seam between the checkout handler and a payment provider:
//! create a hosted checkout session from a request, return its id or fail.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │          PaymentStrategy (trait)              │
//! │  ├── create_checkout_session()                │
//! │  └── provider_name()                          │
//! └───────────────────────────────────────────────┘
//!                        ▲
//!          ┌─────────────┴─────────────┐
//!  ┌───────┴────────┐          ┌───────┴────────┐
//!  │ StripeCheckout │          │  test stubs    │
//!  │   Strategy     │          │                │
//!  └────────────────┘          └────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{CheckoutSession, CheckoutSessionRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Create a hosted checkout session.
    ///
    /// Called exactly once per invocation; implementations must not retry.
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> PaymentResult<CheckoutSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// Redirect targets derived from the site's base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    /// Base URL of the site (e.g., "https://shop.example.com"), used verbatim
    pub domain: String,
}

impl CheckoutUrls {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    /// Where the provider sends the customer after a successful payment
    pub fn success_url(&self) -> String {
        format!("{}/?success=true", self.domain)
    }

    /// Where the provider sends the customer if they cancel
    pub fn cancel_url(&self) -> String {
        format!("{}/?canceled=true", self.domain)
    }
}
