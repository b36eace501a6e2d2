//! Logging for Verdict
//!
//! Installs a `tracing-subscriber` fmt layer in text or JSON form.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use verdict_config::{LogFormat, TelemetryConfig};

const FALLBACK_FILTER: &str = "info";

/// Initialize logging from configuration
///
/// `RUST_LOG` takes precedence over the configured filter. Directives that
/// fail to parse fall back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let directives = select_directives(&config.filter, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::debug!(filter = %directives, format = ?config.format, "logging initialized");
    Ok(())
}

/// Pick the first usable directive string
///
/// Order: the environment override, the configured filter, then `info`.
fn select_directives(configured: &str, from_env: Option<String>) -> String {
    from_env
        .filter(|value| is_valid(value))
        .or_else(|| is_valid(configured).then(|| configured.to_string()))
        .unwrap_or_else(|| FALLBACK_FILTER.to_string())
}

fn is_valid(directives: &str) -> bool {
    !directives.trim().is_empty() && EnvFilter::try_new(directives).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_used() {
        assert_eq!(select_directives("verdict=debug", None), "verdict=debug");
    }

    #[test]
    fn environment_override_wins() {
        assert_eq!(select_directives("info", Some("warn".to_string())), "warn");
    }

    #[test]
    fn invalid_environment_override_is_ignored() {
        assert_eq!(
            select_directives("debug", Some("verdict=notalevel".to_string())),
            "debug"
        );
    }

    #[test]
    fn invalid_configured_filter_falls_back_to_info() {
        assert_eq!(select_directives("verdict=notalevel", None), "info");
        assert_eq!(select_directives("", Some(String::new())), "info");
    }

    #[test]
    fn rust_log_variable_is_read() {
        temp_env::with_var("RUST_LOG", Some("error"), || {
            assert_eq!(
                select_directives("info", std::env::var(EnvFilter::DEFAULT_ENV).ok()),
                "error"
            );
        });
    }
}
