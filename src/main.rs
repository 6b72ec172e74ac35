//! Accounts Ledger - HTTP entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────────┐    ┌────────────┐
//! │  Config  │───▶│ Gateway  │───▶│ AccountsService  │───▶│ Repository │
//! │  (YAML)  │    │  (axum)  │    │ (ordered locks)  │    │ (DashMap)  │
//! └──────────┘    └──────────┘    └──────────────────┘    └────────────┘
//! ```
//!
//! Flags: `--env <name>` / `-e <name>` selects `config/<name>.yaml`
//! (default `dev`), `--port <n>` overrides the gateway port.

use std::sync::Arc;

use accounts_ledger::config::AppConfig;
use accounts_ledger::gateway::{run_server, state::AppState};
use accounts_ledger::logging::init_logging;
use accounts_ledger::transfer::LoggingNotifier;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
///
/// An unparsable value is logged and ignored, so call after logging is up.
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    parse_port_override(&args)
}

fn parse_port_override(args: &[String]) -> Option<u16> {
    let value = args
        .windows(2)
        .find(|pair| pair[0] == "--port")
        .map(|pair| pair[1].as_str())?;
    match value.parse() {
        Ok(port) => Some(port),
        Err(e) => {
            tracing::warn!(
                value = %value,
                error = %e,
                "Ignoring invalid --port, using configured port"
            );
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = init_logging(&app_config);

    tracing::info!(
        "Starting Accounts Ledger in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    let state = Arc::new(AppState::with_notifier(Arc::new(LoggingNotifier)));

    run_server(&app_config.gateway.host, port, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_port_override() {
        assert_eq!(parse_port_override(&args(&["ledger", "--port", "9090"])), Some(9090));
        assert_eq!(parse_port_override(&args(&["ledger", "-e", "prod"])), None);
        // Trailing flag without a value
        assert_eq!(parse_port_override(&args(&["ledger", "--port"])), None);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(parse_port_override(&args(&["ledger", "--port", "80a"])), None);
        assert_eq!(parse_port_override(&args(&["ledger", "--port", "70000"])), None);
    }
}
