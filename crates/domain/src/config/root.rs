use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::gaming::GamingConfig;
use super::jobs::JobsConfig;
use super::logging::LoggingConfig;
use super::metrics::{MetricsBackend, MetricsConfig};
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for Ferrous DoH
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream providers and timeouts
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Response cache TTL policy
    #[serde(default)]
    pub cache: CacheConfig,

    /// Provider metrics persistence
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Latency-sensitive query detection and warm list
    #[serde(default)]
    pub gaming: GamingConfig,

    /// Periodic health check and cache warming
    #[serde(default)]
    pub jobs: JobsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. /etc/ferrous-doh/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ferrous-doh.toml").exists() {
            Self::from_file("ferrous-doh.toml")?
        } else if std::path::Path::new("/etc/ferrous-doh/config.toml").exists() {
            Self::from_file("/etc/ferrous-doh/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(origin) = overrides.public_origin {
            self.server.public_origin = Some(origin);
        }
        if let Some(path) = overrides.metrics_path {
            self.metrics.backend = MetricsBackend::File;
            self.metrics.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.no_jobs {
            self.jobs.enabled = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.upstream.providers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream providers configured".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for provider in &self.upstream.providers {
            if !names.insert(provider.name.as_ref()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate provider name '{}'",
                    provider.name
                )));
            }
            if !provider.url.starts_with("https://") && !provider.url.starts_with("http://") {
                return Err(ConfigError::Validation(format!(
                    "Provider '{}' has invalid URL '{}'",
                    provider.name, provider.url
                )));
            }
        }

        if self.upstream.racing_providers == 0 {
            return Err(ConfigError::Validation(
                "racing_providers must be at least 1".to_string(),
            ));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        if self.jobs.enabled
            && (self.jobs.health_check_interval_secs == 0 || self.jobs.cache_warm_interval_secs == 0)
        {
            return Err(ConfigError::Validation(
                "Job intervals must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub public_origin: Option<String>,
    pub metrics_path: Option<String>,
    pub log_level: Option<String>,
    pub no_jobs: bool,
}
