use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global fmt subscriber. Later calls keep the first subscriber.
///
/// An unparsable `log_level` falls back to `info` and is reported with a
/// warning once the subscriber is installed.
pub fn setup_tracing(log_level: Option<String>) {
    let (filter, invalid) = env_filter(log_level.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    if let Some(e) = invalid {
        warn!(
            "invalid log level {:?}, using {DEFAULT_LOG_LEVEL}: {e}",
            log_level.unwrap_or_default()
        );
    }
}

fn env_filter(log_level: Option<&str>) -> (EnvFilter, Option<ParseError>) {
    match log_level.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(e)) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(e)),
        None => (EnvFilter::new(DEFAULT_LOG_LEVEL), None),
    }
}
