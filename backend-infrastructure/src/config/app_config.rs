use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_dir: String,
    pub catalog_path: String,
    pub log_retention: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3180".to_string(),
            data_dir: "./data".to_string(),
            catalog_path: "./locations.yaml".to_string(),
            log_retention: 1000,
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("WAYPOINT_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_dir = resolve_path(base, &self.data_dir);
        self.catalog_path = resolve_path(base, &self.catalog_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.log_retention == 0 {
            return Err(anyhow!("log_retention must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            log_retention: self.log_retention,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("WAYPOINT_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("WAYPOINT_DATA_DIR") {
            self.data_dir = value;
        }
        if let Ok(value) = env::var("WAYPOINT_CATALOG_PATH") {
            self.catalog_path = value;
        }
        if let Ok(value) = env::var("WAYPOINT_LOG_RETENTION") {
            self.log_retention = value.parse().unwrap_or(self.log_retention);
        }
        if let Ok(value) = env::var("WAYPOINT_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("WAYPOINT_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        AppConfig::default().validate().expect("defaults valid");
    }

    #[test]
    fn validate_rejects_bad_bind_addr() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        let err = config.validate().expect_err("bad bind addr");
        assert!(err.to_string().contains("bind_addr"));
    }

    #[test]
    fn validate_rejects_zero_retention() {
        let config = AppConfig {
            log_retention: 0,
            ..AppConfig::default()
        };
        let err = config.validate().expect_err("zero retention");
        assert!(err.to_string().contains("log_retention"));
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        assert_eq!(
            resolve_path(Path::new("/etc/waypoint"), "./data"),
            "/etc/waypoint/./data"
        );
        assert_eq!(resolve_path(Path::new("/etc/waypoint"), "/var/data"), "/var/data");
        assert_eq!(resolve_path(Path::new("/etc/waypoint"), ""), "");
    }

    #[test]
    fn runtime_config_mirrors_app_config() {
        let config = AppConfig {
            log_retention: 42,
            ..AppConfig::default()
        };
        let runtime = config.to_runtime_config();
        assert_eq!(runtime.bind_addr, config.bind_addr);
        assert_eq!(runtime.log_retention, 42);
    }
}
