//! # Routes
//!
//! Axum router for running the function locally, at the same path the
//! hosting platform serves it on.

use crate::handler::{self, FunctionResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Path the browser cart posts to
pub const FUNCTION_PATH: &str = "/.netlify/functions/create-checkout";

/// Create the dev server router
///
/// Routes:
/// - POST /.netlify/functions/create-checkout - Create checkout session
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route(FUNCTION_PATH, post(create_checkout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "create-checkout",
        "provider": state.strategy.provider_name(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Run the function on the raw request body
async fn create_checkout(State(state): State<AppState>, body: String) -> FunctionResponse {
    handler::handle_body(&state, &body).await
}
