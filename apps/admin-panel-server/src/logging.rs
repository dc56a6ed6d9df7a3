//! Tracing subscriber setup

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Dependencies that are too chatty at the configured level
const QUIET_TARGETS: &str = "sqlx=warn,sea_orm_migration=warn,hyper=warn";

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!("{level},{QUIET_TARGETS}"))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(build_filter(&config.level));

    let result = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}
