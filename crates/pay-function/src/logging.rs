//! Tracing subscriber setup shared by both binaries.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, coloured output for local runs
    Pretty,
    /// One JSON object per line, no ANSI codes, for the function log stream
    Json,
}

/// Install the global subscriber. `RUST_LOG` overrides the default `INFO` level.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .with(filter)
            .init(),
    }
}
