//! # pay-function
//!
//! The create-checkout function: takes the browser cart, creates a Stripe
//! Checkout Session, and returns its id.
//!
//! This crate provides:
//! - `handler`, the request handler itself
//! - the `create-checkout` serverless binary (Lambda-compatible runtime)
//! - the `checkout-dev-server` binary, an axum server for local runs
//!
//! ## Endpoints (dev server)
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/.netlify/functions/create-checkout` | Create checkout session |

pub mod handler;
pub mod logging;
pub mod routes;
pub mod state;

pub use handler::{create_checkout_session, handle_event, FunctionEvent, FunctionResponse};
pub use routes::create_router;
pub use state::{AppState, DevServerConfig, FunctionConfig};
