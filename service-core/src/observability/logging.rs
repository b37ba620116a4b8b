use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the JSON log subscriber: one object per line, event fields
/// flattened, local timestamps at second precision. `RUST_LOG` overrides the
/// default level.
pub fn init_tracing(service_name: &str, log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_owned()))
                .json()
                .flatten_event(true),
        )
        .init();

    tracing::info!(service = service_name, "tracing initialized");
}
