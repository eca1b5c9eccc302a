/**
 * Server Configuration
 *
 * This module loads server settings from environment variables (after
 * `.env` has been applied by the binary) and opens the SQLite database.
 *
 * # Environment Variables
 *
 * | Variable                   | Default                    |
 * |----------------------------|----------------------------|
 * | `DATABASE_URL`             | `sqlite://globetrotter.db` |
 * | `SERVER_HOST`              | `0.0.0.0`                  |
 * | `SERVER_PORT`              | `8000`                     |
 * | `DATABASE_MAX_CONNECTIONS` | `5`                        |
 * | `LISTENER_SEND_TIMEOUT_MS` | `2000`                     |
 * | `LISTENER_BUFFER`          | `64`                       |
 *
 * A variable that is set but cannot be parsed is an error rather than a
 * silent fallback to the default.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://globetrotter.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LISTENER_SEND_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_LISTENER_BUFFER: usize = 64;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{0} must be greater than 0")]
    MustBePositive(&'static str),
}

/// Runtime settings of the server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Upper bound for a single send to one chat listener
    pub listener_send_timeout: Duration,
    /// Queue capacity per chat listener
    pub listener_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            listener_send_timeout: DEFAULT_LISTENER_SEND_TIMEOUT,
            listener_buffer: DEFAULT_LISTENER_BUFFER,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(host) = lookup("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = parse_var(&lookup, "SERVER_PORT")? {
            builder = builder.port(port);
        }
        if let Some(max) = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")? {
            builder = builder.max_connections(max);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "LISTENER_SEND_TIMEOUT_MS")? {
            builder = builder.listener_send_timeout(Duration::from_millis(ms));
        }
        if let Some(buffer) = parse_var(&lookup, "LISTENER_BUFFER")? {
            builder = builder.listener_buffer(buffer);
        }

        builder.build()
    }

    /// `host:port` string for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::MustBePositive("DATABASE_MAX_CONNECTIONS"));
        }
        if self.listener_send_timeout.is_zero() {
            return Err(ConfigError::MustBePositive("LISTENER_SEND_TIMEOUT_MS"));
        }
        if self.listener_buffer == 0 {
            return Err(ConfigError::MustBePositive("LISTENER_BUFFER"));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    max_connections: Option<u32>,
    listener_send_timeout: Option<Duration>,
    listener_buffer: Option<usize>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    pub fn listener_send_timeout(mut self, timeout: Duration) -> Self {
        self.listener_send_timeout = Some(timeout);
        self
    }

    pub fn listener_buffer(mut self, buffer: usize) -> Self {
        self.listener_buffer = Some(buffer);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let config = ServerConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
            listener_send_timeout: self
                .listener_send_timeout
                .unwrap_or(defaults.listener_send_timeout),
            listener_buffer: self.listener_buffer.unwrap_or(defaults.listener_buffer),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Open the SQLite pool and bring the schema up to date
///
/// The database file is created when missing. Foreign keys are switched on
/// so that deleting a trip cascades to its stops, activities and messages.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("[Startup] Connecting to database {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("[Startup] Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("[Startup] Database ready");

    Ok(pool)
}

/// Single-connection in-memory database with the schema applied
///
/// Every connection to `sqlite::memory:` sees its own database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}
