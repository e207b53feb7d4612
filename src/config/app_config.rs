use serde::Deserialize;

use crate::domain::related::RelatedConfig;
use crate::domain::DomainError;
use crate::infrastructure::cache::{CacheConfig, CacheType};
use crate::infrastructure::hadith_api::HadithApiConfig;
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub hadith_api: HadithApiConfig,
    #[serde(default)]
    pub related: RelatedConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Locale used when a request does not name one
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Grace period for in-flight requests on shutdown
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_shutdown_timeout_secs() -> u64 {
    10
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_locale: default_locale(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Cross-field checks that serde defaults cannot express
    pub fn validate(&self) -> Result<(), DomainError> {
        self.related.validate()?;

        if self.server.default_locale.trim().is_empty() {
            return Err(DomainError::configuration(
                "server.default_locale must not be empty",
            ));
        }

        if self.hadith_api.base_url.trim().is_empty() {
            return Err(DomainError::configuration("hadith_api.base_url is required"));
        }

        // moka evicts every entry after max_ttl_secs regardless of its own TTL
        if self.cache.cache_type == CacheType::InMemory
            && self.related.cache_ttl_secs > self.cache.max_ttl_secs
        {
            return Err(DomainError::configuration(format!(
                "related.cache_ttl_secs ({}) exceeds cache.max_ttl_secs ({}) of the in-memory cache",
                self.related.cache_ttl_secs, self.cache.max_ttl_secs
            )));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
