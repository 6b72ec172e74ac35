//! Tracing subscriber setup
//!
//! The configured `log_level` applies to the ledger's own events (the library
//! and the server binary share the `accounts_ledger` target prefix). Dependencies
//! such as hyper and axum stay at `warn` so request noise does not bury
//! transfer logs. `RUST_LOG` overrides both.

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target prefix of every event emitted by this crate
const LEDGER_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Filter directives used when `RUST_LOG` is unset
fn default_directives(config: &AppConfig) -> String {
    format!("warn,{LEDGER_TARGET}={}", config.log_level)
}

fn rotation(config: &AppConfig) -> Rotation {
    match config.rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

/// Install the global subscriber. Keep the returned guard alive for the
/// whole program or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender =
        RollingFileAppender::new(rotation(config), &config.log_dir, &config.log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        // Target kept so ledger events can be queried apart from dependencies
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_scope_level_to_ledger() {
        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(default_directives(&config), "warn,accounts_ledger=debug");
        // Must be a valid filter
        assert!(EnvFilter::try_new(default_directives(&config)).is_ok());
    }

    #[test]
    fn test_rotation_mapping() {
        let mut config = AppConfig::default();
        assert_eq!(rotation(&config), Rotation::DAILY);

        config.rotation = "hourly".to_string();
        assert_eq!(rotation(&config), Rotation::HOURLY);

        config.rotation = "weekly".to_string();
        assert_eq!(rotation(&config), Rotation::NEVER);
    }
}
