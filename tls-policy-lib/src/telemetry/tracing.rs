use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::LoggingConfig;
use crate::error::{PolicyError, Result};

/// Initialize the global tracing subscriber
///
/// `RUST_LOG`, when set, overrides the configured level.
pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&logging.level)?,
    };

    let subscriber = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(logging.show_target));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PolicyError::Config(format!("tracing subscriber already installed: {e}")))
}

/// A typo in `logging.level` is reported instead of silently logging nothing
fn configured_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| PolicyError::Config(format!("invalid logging.level '{level}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_accepts_levels_and_directives() {
        assert!(configured_filter("info").is_ok());
        assert!(configured_filter("warn,tls_policy_lib=debug").is_ok());
    }

    #[test]
    fn test_configured_filter_names_bad_level() {
        match configured_filter("tls_policy_lib=loud") {
            Err(PolicyError::Config(msg)) => assert!(msg.contains("tls_policy_lib=loud")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
