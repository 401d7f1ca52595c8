//! Sync service settings
//!
//! Settings are resolved once at process start from built-in defaults,
//! overridden by `SYNC_SERVICE_*` environment variables (optionally seeded
//! from a `.env` file), and then passed explicitly to whatever needs them.

use crate::error::Result;
use ::config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ENV_PREFIX: &str = "SYNC_SERVICE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub app_name: String,
    /// Path prefix the HTTP routes are mounted under
    pub api_prefix: String,
    pub host: String,
    pub port: u16,
    /// Emit structured JSON logs from the service
    pub log_json: bool,
    /// Keyring service namespace for stored secrets
    pub secret_service_name: String,
    /// Keyring key holding the API token
    pub api_token_key: String,
    /// Keyring key holding the admin password
    pub admin_password_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "AI Client Sync Service".to_string(),
            api_prefix: "/api/v1".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_json: true,
            secret_service_name: "ai-client-sync-service".to_string(),
            api_token_key: "sync-service-api-token".to_string(),
            admin_password_key: "sync-service-admin-password".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `.env` and the process environment
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => debug!(error = %e, "ignoring unreadable .env file"),
        }

        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    /// Resolve settings against an explicit environment source
    pub fn from_env(environment: Environment) -> Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("api_prefix", defaults.api_prefix)?
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_json", defaults.log_json)?
            .set_default("secret_service_name", defaults.secret_service_name)?
            .set_default("api_token_key", defaults.api_token_key)?
            .set_default("admin_password_key", defaults.admin_password_key)?
            .add_source(environment.prefix_separator("_").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Socket address string the service listens on
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
