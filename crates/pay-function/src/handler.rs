//! # Create-Checkout Handler
//!
//! Turns a cart payload into a hosted checkout session and answers with
//! `200 {"id": ...}` or a generic `500 {"error": ...}`.
//!
//! Every failure, whether a malformed body, an empty cart, a network error or
//! a provider rejection, produces the same response. The cause only goes to
//! the log.

use crate::state::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use pay_core::{
    CheckoutRequestBody, CheckoutSession, CheckoutSessionRequest, CheckoutUrls, PaymentError,
    PaymentResult, PaymentStrategy,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, instrument};
use uuid::Uuid;

/// The only error message a caller ever sees
pub const CHECKOUT_FAILED: &str = "Failed to create checkout session";

// =============================================================================
// Request/Response Types
// =============================================================================

/// HTTP-style event delivered by the hosting platform
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionEvent {
    /// Raw request body
    #[serde(default)]
    pub body: Option<String>,
    /// Whether `body` is base64 encoded
    #[serde(default, rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
}

impl FunctionEvent {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            is_base64_encoded: false,
        }
    }

    /// The request body as text
    pub fn decoded_body(&self) -> PaymentResult<String> {
        let body = self
            .body
            .as_deref()
            .ok_or_else(|| PaymentError::InvalidRequest("Request has no body".to_string()))?;

        if !self.is_base64_encoded {
            return Ok(body.to_string());
        }

        let bytes = BASE64.decode(body).map_err(|e| {
            PaymentError::InvalidRequest(format!("Body is not valid base64: {}", e))
        })?;
        String::from_utf8(bytes)
            .map_err(|e| PaymentError::InvalidRequest(format!("Body is not UTF-8: {}", e)))
    }
}

/// HTTP-style response returned to the hosting platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl FunctionResponse {
    fn json(status_code: u16, payload: Value) -> Self {
        Self {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body: payload.to_string(),
        }
    }

    /// `200 {"id": <session id>}`
    pub fn created(session: &CheckoutSession) -> Self {
        Self::json(200, json!({ "id": session.id }))
    }

    /// `500 {"error": "Failed to create checkout session"}`
    pub fn failed() -> Self {
        Self::json(500, json!({ "error": CHECKOUT_FAILED }))
    }
}

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// Success body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionCreated {
    pub id: String,
}

/// Failure body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Serverless entry point: decode the event body, then create the session.
pub async fn handle_event(state: &AppState, event: FunctionEvent) -> FunctionResponse {
    match event.decoded_body() {
        Ok(body) => handle_body(state, &body).await,
        Err(e) => failure(&e),
    }
}

/// Create a session for a raw request body with a fresh request id.
pub async fn handle_body(state: &AppState, body: &str) -> FunctionResponse {
    let request_id = Uuid::new_v4().to_string();
    create_checkout_session(body, &state.urls, state.strategy.as_ref(), &request_id).await
}

/// Parse the cart, call the provider once, and map the outcome to a response.
#[instrument(skip(body, urls, strategy), fields(provider = strategy.provider_name()))]
pub async fn create_checkout_session(
    body: &str,
    urls: &CheckoutUrls,
    strategy: &dyn PaymentStrategy,
    request_id: &str,
) -> FunctionResponse {
    match initiate(body, urls, strategy, request_id).await {
        Ok(session) => {
            info!(
                "Created checkout session: id={}, expires_at={:?}",
                session.id, session.expires_at
            );
            FunctionResponse::created(&session)
        }
        Err(e) => failure(&e),
    }
}

async fn initiate(
    body: &str,
    urls: &CheckoutUrls,
    strategy: &dyn PaymentStrategy,
    request_id: &str,
) -> PaymentResult<CheckoutSession> {
    let request_body = CheckoutRequestBody::from_json(body)?;
    let request = CheckoutSessionRequest::for_cart(&request_body.cart, urls, request_id)?;

    info!(
        "Creating checkout: {} line items, {} units, total={}, success_url={}",
        request.line_items.len(),
        request.item_count(),
        request.currency().display(request.total()),
        request.success_url
    );

    strategy.create_checkout_session(&request).await
}

fn failure(err: &PaymentError) -> FunctionResponse {
    error!(
        kind = err.kind(),
        input_error = err.is_input_error(),
        "Error creating checkout session: {}",
        err
    );
    FunctionResponse::failed()
}
