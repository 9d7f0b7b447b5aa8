//! Application settings loaded via OrthoConfig.
//!
//! Values come from environment variables named after the fields
//! (`API_KEY`, `DATABASE_URI`, `PORT`, ...) or the matching CLI flags.

use std::net::IpAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.deepai.org/api/text2img";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;

/// Problems found while turning raw settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{name} must be set")]
    Missing { name: &'static str },
    #[error("{name} is invalid: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Raw settings for the backend process.
#[derive(Clone, Deserialize, OrthoConfig)]
pub struct AppSettings {
    /// Credential sent to the generation service.
    pub api_key: Option<String>,
    /// PostgreSQL connection URI.
    pub database_uri: Option<String>,
    /// Listening port.
    pub port: Option<u16>,
    /// Listening address.
    pub host: Option<String>,
    /// Text-to-image endpoint.
    pub generation_endpoint: Option<String>,
    /// Timeout for one generation call.
    pub generation_timeout_secs: Option<u64>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// How long a store call waits for a pooled connection.
    pub db_checkout_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redacted(value: Option<&String>) -> Option<&'static str> {
            value.map(|_| "<redacted>")
        }
        f.debug_struct("AppSettings")
            .field("api_key", &redacted(self.api_key.as_ref()))
            .field("database_uri", &redacted(self.database_uri.as_ref()))
            .field("port", &self.port)
            .field("host", &self.host)
            .field("generation_endpoint", &self.generation_endpoint)
            .field("generation_timeout_secs", &self.generation_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_checkout_timeout_secs", &self.db_checkout_timeout_secs)
            .finish()
    }
}

fn nonzero_secs(secs: u64, name: &'static str) -> Result<Duration, SettingsError> {
    if secs == 0 {
        return Err(SettingsError::Invalid {
            name,
            message: "must be at least one second".to_owned(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn required<'a>(value: Option<&'a String>, name: &'static str) -> Result<&'a str, SettingsError> {
    value
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(SettingsError::Missing { name })
}

impl AppSettings {
    /// # Errors
    ///
    /// Returns [`SettingsError::Missing`] when `API_KEY` is unset or empty.
    pub fn api_key(&self) -> Result<&str, SettingsError> {
        required(self.api_key.as_ref(), "API_KEY")
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::Missing`] when `DATABASE_URI` is unset or empty.
    pub fn database_uri(&self) -> Result<&str, SettingsError> {
        required(self.database_uri.as_ref(), "DATABASE_URI")
    }

    /// Address and port to bind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when `HOST` is not an IP address.
    pub fn bind_addr(&self) -> Result<(IpAddr, u16), SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip = host.parse::<IpAddr>().map_err(|err| SettingsError::Invalid {
            name: "HOST",
            message: err.to_string(),
        })?;
        Ok((ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when `GENERATION_ENDPOINT` is not
    /// an absolute URL.
    pub fn generation_endpoint(&self) -> Result<Url, SettingsError> {
        let raw = self
            .generation_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_GENERATION_ENDPOINT);
        Url::parse(raw).map_err(|err| SettingsError::Invalid {
            name: "GENERATION_ENDPOINT",
            message: err.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the timeout is zero.
    pub fn generation_timeout(&self) -> Result<Duration, SettingsError> {
        nonzero_secs(
            self.generation_timeout_secs
                .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS),
            "GENERATION_TIMEOUT_SECS",
        )
    }

    pub const fn run_migrations(&self) -> bool {
        self.run_migrations
    }

    /// Pool size override; `None` keeps the pool's own default.
    pub const fn db_max_connections(&self) -> Option<u32> {
        self.db_max_connections
    }

    /// Pool checkout timeout override; `None` keeps the pool's own default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] when the timeout is zero.
    pub fn db_checkout_timeout(&self) -> Result<Option<Duration>, SettingsError> {
        self.db_checkout_timeout_secs
            .map(|secs| nonzero_secs(secs, "DB_CHECKOUT_TIMEOUT_SECS"))
            .transpose()
    }
}
