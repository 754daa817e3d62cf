//! Application configuration management
//!
//! The config file is optional and only read, never written. Every field has a
//! default, and the defaults keep requests on reqwest's default headers.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::models::{AppError, AppResult};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Overrides reqwest's default (empty) user agent
    pub user_agent: Option<String>,
    /// Proxy URL applied to every request ("http" or "https")
    pub proxy: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const PROXY_SCHEMES: &[&str] = &["http", "https"];

impl AppConfig {
    /// Load configuration from the default location, or defaults if there is no file
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No configuration at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig =
            serde_json::from_str(&content).with_context(|| "Failed to parse config file")?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        tracing::info!("Loaded configuration from: {:?}", path);
        Ok(config)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "ytgrab", "ytgrab")
            .with_context(|| "Failed to get project directories")?;

        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        if let Some(ref user_agent) = self.http.user_agent {
            if user_agent.trim().is_empty() {
                return Err(AppError::Config("User agent must not be empty".to_string()));
            }
        }

        if let Some(ref proxy) = self.http.proxy {
            let parsed = url::Url::parse(proxy)
                .map_err(|e| AppError::Config(format!("Invalid proxy URL {}: {}", proxy, e)))?;
            if !PROXY_SCHEMES.contains(&parsed.scheme()) {
                return Err(AppError::Config(format!(
                    "Unsupported proxy scheme: {}",
                    parsed.scheme()
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(AppError::Config(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
