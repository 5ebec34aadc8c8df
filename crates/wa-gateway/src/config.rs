//! Configuration for the gateway.

use anyhow::{bail, Context, Result};
use message_log::DbSettings;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Gateway configuration, read from flat environment variables
/// (`PORT`, `AUTH_KEY`, `DB_HOST`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret expected in the `key` field of send requests
    pub auth_key: SecretString,

    #[serde(default = "default_db_host")]
    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    #[serde(default = "default_db_user")]
    pub db_user: String,

    #[serde(default = "default_db_password")]
    pub db_password: SecretString,

    /// Database holding `message_logs`; created if absent
    #[serde(default = "default_db_name")]
    pub db_name: String,

    /// Sender identifier written to the `from` column
    #[serde(default)]
    pub sender_client_id: Option<String>,

    /// Where send attempts are logged
    #[serde(default)]
    pub log_store: LogStoreKind,

    /// Session bridge base URL
    #[serde(default = "default_session_url")]
    pub session_url: String,

    /// How often the session bridge is polled for lifecycle changes
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub session_poll_interval: Duration,

    /// Log level, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStoreKind {
    #[default]
    Mysql,
    Memory,
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    7000
}

fn default_db_host() -> String {
    "localhost".into()
}

fn default_db_port() -> u16 {
    3306
}

fn default_db_user() -> String {
    "root".into()
}

fn default_db_password() -> SecretString {
    SecretString::new(String::new())
}

fn default_db_name() -> String {
    "whatsapp_gateway".into()
}

fn default_session_url() -> String {
    "http://localhost:3000".into()
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(2)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Load configuration from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self> {
        Self::from_environment(config::Environment::default().source(Some(vars)))
    }

    fn from_environment(env: config::Environment) -> Result<Self> {
        let config: Config = config::Config::builder()
            .add_source(env.separator("__").try_parsing(false))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if config.auth_key.expose_secret().is_empty() {
            bail!("AUTH_KEY must not be empty");
        }
        config.bind_addr()?;

        Ok(config)
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not an IP address: {}", self.listen_addr))?;

        Ok(SocketAddr::new(ip, self.port))
    }

    /// Sender identifier, if one is configured.
    pub fn sender_id(&self) -> Option<String> {
        self.sender_client_id
            .as_ref()
            .filter(|s| !s.is_empty())
            .cloned()
    }

    /// MySQL connection settings.
    pub fn db_settings(&self) -> DbSettings {
        DbSettings {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
        }
    }
}
