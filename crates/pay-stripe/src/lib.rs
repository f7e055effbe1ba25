//! # pay-stripe
//!
//! Stripe Checkout strategy for the cart checkout function.
//!
//! `StripeCheckoutStrategy` creates one hosted Checkout Session per call with
//! dynamic `price_data` line items, card payments only, in `payment` mode.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_stripe::StripeCheckoutStrategy;
//! use pay_core::PaymentStrategy;
//!
//! // Create strategy from environment (STRIPE_SECRET_KEY)
//! let strategy = StripeCheckoutStrategy::from_env()?;
//!
//! let session = strategy.create_checkout_session(&request).await?;
//! // Hand session.id to the browser for redirectToCheckout
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckoutStrategy;
pub use config::StripeConfig;
