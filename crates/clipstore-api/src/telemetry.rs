//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing for the process.
///
/// Production emits JSON lines for log aggregation; everything else gets a
/// compact console format. `RUST_LOG` overrides the default filter.
pub fn init_tracing(environment: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clipstore=debug,tower_http=debug".into());

    if environment == "production" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        let console_fmt = tracing_subscriber::fmt::layer().event_format(
            Format::default()
                .compact()
                .with_target(false)
                .without_time(),
        );
        tracing_subscriber::registry()
            .with(filter)
            .with(console_fmt)
            .init();
    }
}
