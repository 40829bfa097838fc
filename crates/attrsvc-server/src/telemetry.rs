//! Log subscriber initialization.

use attrsvc_config::ObservabilityConfig;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
};

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let fmt_layer = if config.is_json() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_span_list(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
}

/// Installs a plain subscriber for failures that happen before configuration is known.
pub fn init_default_logging() {
    let _ = init_logging(&ObservabilityConfig::default());
}

fn default_directives(level: &str) -> String {
    format!("{},tower_http=debug,sqlx=warn", level.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives("INFO"), "info,tower_http=debug,sqlx=warn");
    }

    #[test]
    fn test_default_filter_keeps_query_and_request_lines() {
        let subscriber =
            tracing_subscriber::registry().with(EnvFilter::new(default_directives("info")));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "sql", tracing::Level::INFO));
            assert!(tracing::enabled!(target: "http", tracing::Level::INFO));
            assert!(!tracing::enabled!(target: "sqlx::query", tracing::Level::INFO));
        });
    }

    #[test]
    fn test_second_init_fails_without_panicking() {
        init_default_logging();
        assert!(init_logging(&ObservabilityConfig::default()).is_err());
    }
}
