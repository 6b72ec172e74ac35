use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly" | "daily" | anything else = never rotate
    pub rotation: String,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "accounts_ledger.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml`
    ///
    /// # Errors
    /// Missing file or invalid YAML.
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{env}.yaml");
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {config_path}"))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {config_path}"))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
log_level: debug
log_dir: ./logs
log_file: ledger.log
use_json: true
rotation: hourly
gateway:
  host: 127.0.0.1
  port: 9090
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.use_json);
        assert_eq!(config.rotation, "hourly");
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.gateway.port, 9090);
    }

    #[test]
    fn test_missing_gateway_rejected() {
        let yaml = "log_level: info\nlog_dir: .\nlog_file: a.log\nuse_json: false\nrotation: never\n";
        assert!(AppConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("config/does-not-exist.yaml"));
    }
}
