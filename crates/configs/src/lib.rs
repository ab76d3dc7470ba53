//! # configs
//!
//! Runtime configuration for the Finders binary. Settings come from the
//! process environment under the `FINDERS_` prefix, with a local `.env`
//! file honored for development; anything unset falls back to a default
//! that works on a laptop.

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Server settings.
///
/// | Variable             | Default     |
/// |----------------------|-------------|
/// | `FINDERS_HOST`       | `127.0.0.1` |
/// | `FINDERS_PORT`       | `8080`      |
/// | `FINDERS_SEED_DEMO`  | `true`      |
/// | `FINDERS_LOG_JSON`   | `false`     |
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Load the demo account and listings into the fresh store at startup.
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
    /// Emit logs as JSON lines instead of the human-readable format.
    #[serde(default)]
    pub log_json: bool,
}

impl AppConfig {
    /// Reads `.env` (if any), then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let source = Environment::with_prefix("FINDERS").try_parsing(true);
        let config = Config::builder().add_source(source).build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

fn default_seed_demo() -> bool {
    true
}
