//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Periodic snapshot refresh configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// How often the background task regenerates the snapshot (seconds)
    #[serde(default = "default_refresh_interval")]
    pub interval_secs: u64,
}

fn default_refresh_interval() -> u64 {
    300 // 5 minutes, matching the original dashboard timer
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_refresh_interval(),
        }
    }
}

/// Assistant presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Simulated "thinking" delay before an assistant reply (milliseconds)
    #[serde(default = "default_thinking_delay")]
    pub thinking_delay_ms: u64,
}

fn default_thinking_delay() -> u64 {
    1500
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay(),
        }
    }
}

/// Simulated login configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Simulated authentication delay (milliseconds)
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
}

fn default_login_delay() -> u64 {
    1500
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("mpulse").join("config.toml")),
            Some(PathBuf::from("/etc/mpulse/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("MPULSE_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("MPULSE_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }
        if let Ok(interval) = std::env::var("MPULSE_REFRESH_INTERVAL_SECS") {
            if let Ok(secs) = interval.parse() {
                self.refresh.interval_secs = secs;
            }
        }
        if let Ok(delay) = std::env::var("MPULSE_THINKING_DELAY_MS") {
            if let Ok(ms) = delay.parse() {
                self.assistant.thinking_delay_ms = ms;
            }
        }
        if let Ok(level) = std::env::var("MPULSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MPULSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# M-Pulse Configuration
#
# Environment variables override these settings:
# - MPULSE_HOST
# - MPULSE_PORT
# - MPULSE_REFRESH_INTERVAL_SECS
# - MPULSE_THINKING_DELAY_MS
# - MPULSE_LOG_LEVEL
# - MPULSE_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty = permissive)
cors_origins = []

[refresh]
# How often the civic snapshot regenerates (seconds)
interval_secs = 300

[assistant]
# Simulated "thinking" delay before assistant replies (ms)
thinking_delay_ms = 1500

[auth]
# Simulated login delay (ms)
login_delay_ms = 1500

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.refresh.interval_secs, 300);
        assert_eq!(config.assistant.thinking_delay_ms, 1500);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.addr(), "0.0.0.0:8090");
        assert_eq!(config.auth.login_delay_ms, 1500);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[api]\nport = 9000\n").unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.refresh.interval_secs, 300);
    }
}
