//! # Stripe Checkout Sessions
//!
//! Implementation of the Stripe Checkout Sessions API
//! (`POST /v1/checkout/sessions`, form-encoded).

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use pay_core::{
    CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentResult, PaymentStrategy,
};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

const PROVIDER: &str = "stripe";

/// Stripe Checkout Session strategy
///
/// Uses Stripe's hosted checkout page; card data never touches this process.
pub struct StripeCheckoutStrategy {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckoutStrategy {
    /// Create a new Stripe checkout strategy
    pub fn new(config: StripeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }
}

/// Flatten a session request into Stripe's bracketed form encoding.
fn session_form(request: &CheckoutSessionRequest) -> Vec<(String, String)> {
    let mut form: Vec<(String, String)> = Vec::new();

    for (i, method) in request.payment_method_types.iter().enumerate() {
        form.push((
            format!("payment_method_types[{}]", i),
            method.as_str().to_string(),
        ));
    }

    form.push(("mode".to_string(), request.mode.as_str().to_string()));
    form.push(("success_url".to_string(), request.success_url.clone()));
    form.push(("cancel_url".to_string(), request.cancel_url.clone()));

    for (i, item) in request.line_items.iter().enumerate() {
        form.push((
            format!("line_items[{}][price_data][currency]", i),
            item.currency.as_str().to_string(),
        ));
        form.push((
            format!("line_items[{}][price_data][product_data][name]", i),
            item.name.clone(),
        ));
        form.push((
            format!("line_items[{}][price_data][unit_amount]", i),
            item.unit_amount.to_string(),
        ));
        form.push((
            format!("line_items[{}][quantity]", i),
            item.quantity.to_string(),
        ));
    }

    form
}

#[async_trait]
impl PaymentStrategy for StripeCheckoutStrategy {
    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> PaymentResult<CheckoutSession> {
        let form = session_form(request);

        debug!(
            "Creating Stripe checkout session: {} line items, mode={}",
            request.line_items.len(),
            request.mode.as_str()
        );

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &request.request_id)
            .form(&form)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            debug!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(PaymentError::ProviderError {
                    provider: PROVIDER.to_string(),
                    message: error_response.error.describe(),
                });
            }

            return Err(PaymentError::ProviderError {
                provider: PROVIDER.to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session: StripeCheckoutSessionResponse =
            serde_json::from_str(&body).map_err(|e| {
                PaymentError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        info!("Created Stripe checkout session: id={}", session.id);

        Ok(CheckoutSession {
            id: session.id,
            provider: PROVIDER.to_string(),
            url: session.url,
            expires_at: session
                .expires_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl StripeError {
    fn describe(&self) -> String {
        let message = self.message.as_deref().unwrap_or("unknown error");
        match (&self.error_type, &self.code) {
            (Some(t), Some(c)) => format!("{} ({}/{})", message, t, c),
            (Some(t), None) => format!("{} ({})", message, t),
            (None, Some(c)) => format!("{} ({})", message, c),
            (None, None) => message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{Cart, CartItem, CheckoutUrls};
    use rust_decimal_macros::dec;

    fn field<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
        form.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_session_form() {
        let cart = Cart::new()
            .with_item(CartItem::new("Poster", dec!(19.99), 2))
            .with_item(CartItem::new("Sticker", dec!(0.50), 10));
        let urls = CheckoutUrls::new("https://shop.example.com");
        let request = CheckoutSessionRequest::for_cart(&cart, &urls, "req_form").unwrap();

        let form = session_form(&request);

        assert_eq!(field(&form, "payment_method_types[0]"), Some("card"));
        assert_eq!(field(&form, "mode"), Some("payment"));
        assert_eq!(
            field(&form, "success_url"),
            Some("https://shop.example.com/?success=true")
        );
        assert_eq!(
            field(&form, "cancel_url"),
            Some("https://shop.example.com/?canceled=true")
        );
        assert_eq!(field(&form, "line_items[0][price_data][currency]"), Some("usd"));
        assert_eq!(
            field(&form, "line_items[0][price_data][product_data][name]"),
            Some("Poster")
        );
        assert_eq!(field(&form, "line_items[0][price_data][unit_amount]"), Some("1999"));
        assert_eq!(field(&form, "line_items[0][quantity]"), Some("2"));
        assert_eq!(field(&form, "line_items[1][price_data][unit_amount]"), Some("50"));
        assert_eq!(field(&form, "line_items[1][quantity]"), Some("10"));
        assert_eq!(field(&form, "line_items[2][quantity]"), None);
    }

    #[test]
    fn test_stripe_error_description() {
        let parsed: StripeErrorResponse = serde_json::from_str(
            r#"{"error":{"message":"Invalid API Key provided: sk_test_****","type":"invalid_request_error"}}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.error.describe(),
            "Invalid API Key provided: sk_test_**** (invalid_request_error)"
        );

        let parsed: StripeErrorResponse =
            serde_json::from_str(r#"{"error":{"type":"api_error"}}"#).unwrap();
        assert_eq!(parsed.error.describe(), "unknown error (api_error)");
    }

    #[test]
    fn test_provider_name() {
        let strategy = StripeCheckoutStrategy::new(StripeConfig::new("sk_test_abc")).unwrap();
        assert_eq!(strategy.provider_name(), "stripe");
        assert_eq!(strategy.config().api_base_url, "https://api.stripe.com");
    }
}
