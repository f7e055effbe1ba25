//! # Function State
//!
//! Configuration and the immutable state shared by every invocation of a
//! warm function instance: the payment strategy and the redirect URLs.

use pay_core::{BoxedPaymentStrategy, CheckoutUrls, PaymentError, PaymentResult};
use pay_stripe::{StripeCheckoutStrategy, StripeConfig};
use std::net::SocketAddr;
use std::sync::Arc;

/// Environment-derived configuration for the checkout function
#[derive(Debug, Clone)]
pub struct FunctionConfig {
    /// Stripe credentials and client settings
    pub stripe: StripeConfig,
    /// Base URL of the site, used to build redirect URLs
    pub domain: String,
}

impl FunctionConfig {
    /// Load from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    /// - `URL` (provided by the hosting platform)
    pub fn from_env() -> PaymentResult<Self> {
        Self::from_env_with_fallback(None)
    }

    /// Like [`FunctionConfig::from_env`], but uses `fallback_domain` when `URL` is unset.
    pub fn from_env_with_fallback(fallback_domain: Option<String>) -> PaymentResult<Self> {
        dotenvy::dotenv().ok();

        let stripe = StripeConfig::from_env()?;
        let domain = std::env::var("URL")
            .ok()
            .filter(|d| !d.trim().is_empty())
            .or(fallback_domain)
            .ok_or_else(|| PaymentError::Configuration("URL not set".to_string()))?;

        Ok(Self { stripe, domain })
    }

    pub fn urls(&self) -> CheckoutUrls {
        CheckoutUrls::new(&self.domain)
    }
}

/// Local dev server configuration
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl DevServerConfig {
    /// Load from environment variables (`HOST`, `PORT`)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8888),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> PaymentResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            PaymentError::Configuration(format!(
                "Invalid socket address {}:{}: {}",
                self.host, self.port, e
            ))
        })
    }

    /// Base URL the dev server answers on
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// State shared by every invocation
#[derive(Clone)]
pub struct AppState {
    /// Payment provider
    pub strategy: BoxedPaymentStrategy,
    /// Redirect URLs
    pub urls: CheckoutUrls,
}

impl AppState {
    pub fn new(strategy: BoxedPaymentStrategy, urls: CheckoutUrls) -> Self {
        Self { strategy, urls }
    }

    /// Build state backed by Stripe
    pub fn from_config(config: FunctionConfig) -> PaymentResult<Self> {
        let urls = config.urls();
        let strategy = StripeCheckoutStrategy::new(config.stripe)?;
        Ok(Self::new(Arc::new(strategy), urls))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.strategy.provider_name())
            .field("urls", &self.urls)
            .finish()
    }
}
