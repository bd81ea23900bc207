use crate::services::catalog::{products_url_from_base, CatalogError};
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub recommendations: RecommendationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Upstream product backend
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub api: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendSettings {
    /// Resolve the `/products` resource on the configured backend.
    ///
    /// Fails when the base is not an `http://` or `https://` URL.
    pub fn products_url(&self) -> Result<String, CatalogError> {
        products_url_from_base(&self.api)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_pick_count")]
    pub pick_count: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            pick_count: default_pick_count(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

pub const DEFAULT_BACKEND_API: &str = "http://backend:8080";

fn default_timeout_secs() -> u64 { 5 }
fn default_pick_count() -> usize { 3 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from defaults, files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration files (config/default, config/local)
    /// 3. Environment variables prefixed with ML_, e.g. ML__SERVER__PORT -> server.port
    /// 4. Plain variables: BACKEND_API, PORT, LOG_LEVEL, LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_env())
            .build()?;

        let settings = apply_plain_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Environment overrides apply the same way as in [`Settings::load`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(prefixed_env())
            .build()?;

        let settings = apply_plain_env_vars(settings)?;

        settings.try_deserialize()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("backend.api", DEFAULT_BACKEND_API)?
        .set_default("backend.timeout_secs", default_timeout_secs())?
        .set_default("recommendations.pick_count", default_pick_count() as u64)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn prefixed_env() -> Environment {
    Environment::with_prefix("ML")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

const PLAIN_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("BACKEND_API", "backend.api"),
    ("PORT", "server.port"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

/// Overlay the unprefixed variables the deployment manifests set directly
fn apply_plain_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in PLAIN_ENV_OVERRIDES {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
