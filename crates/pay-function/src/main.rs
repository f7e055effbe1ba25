//! # checkout-dev-server
//!
//! Runs the create-checkout function behind a local HTTP server so the
//! browser cart can be exercised without the hosting platform.
//!
//! ## Usage
//!
//! ```bash
//! export STRIPE_SECRET_KEY=sk_test_...
//! # optional: URL defaults to the server's own address
//! export URL=http://localhost:8888
//!
//! checkout-dev-server
//! ```

use pay_function::logging::{init_tracing, LogFormat};
use pay_function::routes::{create_router, FUNCTION_PATH};
use pay_function::{AppState, DevServerConfig, FunctionConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::Pretty);

    let server = DevServerConfig::from_env();
    let addr = server.socket_addr()?;

    let config = FunctionConfig::from_env_with_fallback(Some(server.base_url()))?;
    info!("Redirect domain: {}", config.domain);
    if !config.stripe.is_test_mode() {
        tracing::warn!("Using a live Stripe key; sessions will take real payments");
    }

    let state = AppState::from_config(config)?;
    let app = create_router(state);

    info!("Checkout dev server on http://{}", addr);
    info!("POST http://{}{}", addr, FUNCTION_PATH);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
