//! # create-checkout
//!
//! Serverless entry point. Speaks the Lambda runtime API, which is how the
//! hosting platform invokes Rust functions.
//!
//! ```bash
//! export STRIPE_SECRET_KEY=sk_test_...
//! export URL=https://shop.example.com
//! ```

use lambda_runtime::{service_fn, Error, LambdaEvent};
use pay_function::handler::{handle_event, FunctionEvent, FunctionResponse};
use pay_function::logging::{init_tracing, LogFormat};
use pay_function::{AppState, FunctionConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(LogFormat::Json);

    let config = FunctionConfig::from_env()?;
    let state = AppState::from_config(config)?;
    info!("create-checkout ready: {:?}", state);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<FunctionEvent>| {
        let state = state.clone();
        async move { Ok::<FunctionResponse, Error>(handle_event(&state, event.payload).await) }
    }))
    .await
}
