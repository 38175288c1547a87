//! Database module for handling PostgreSQL connections
//!
//! This module provides connection configuration, single-connection setup,
//! and health checks for the PostgreSQL database. Every operation in this
//! backend is a one-shot request/response call, so each caller opens its own
//! connection and owns it for the duration of the call; connections are not
//! pooled or shared.

use std::time::Duration;

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tracing::info;

use crate::error::{DatabaseError, DatabaseResult};

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database server hostname
    pub host: String,
    /// Database server port
    pub port: u16,
    /// Name of the database to connect to
    pub database: String,
    /// Username for authentication
    pub username: String,
    /// Password for authentication
    pub password: String,
    /// Deadline for establishing a connection
    pub connect_timeout: Duration,
    /// Deadline for a single query
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// The returned configuration has already passed [`validate`].
    ///
    /// # Environment Variables
    /// - `DATABASE_HOST`: database server hostname (default: "localhost")
    /// - `DATABASE_PORT`: database server port (default: 5432)
    /// - `DATABASE_NAME`: database name (default: "conjunto_residencial")
    /// - `DATABASE_USERNAME`: username (default: "postgres")
    /// - `DATABASE_PASSWORD`: password (default: "postgres")
    /// - `DATABASE_CONNECT_TIMEOUT_SECS`: connection deadline in seconds (default: 30)
    /// - `DATABASE_QUERY_TIMEOUT_SECS`: query deadline in seconds (default: 5)
    ///
    /// [`validate`]: DatabaseConfig::validate
    pub fn from_env() -> DatabaseResult<Self> {
        let host = std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string());

        let port = std::env::var("DATABASE_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()
            .unwrap_or(5432);

        let database =
            std::env::var("DATABASE_NAME").unwrap_or_else(|_| "conjunto_residencial".to_string());

        let username = std::env::var("DATABASE_USERNAME").unwrap_or_else(|_| "postgres".to_string());

        let password = std::env::var("DATABASE_PASSWORD").unwrap_or_else(|_| "postgres".to_string());

        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let query_timeout = std::env::var("DATABASE_QUERY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        let config = DatabaseConfig {
            host,
            port,
            database,
            username,
            password,
            connect_timeout: Duration::from_secs(connect_timeout),
            query_timeout: Duration::from_secs(query_timeout),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configuration that cannot produce a usable connection
    ///
    /// # Returns
    /// * `DatabaseResult<()>` - Ok, or `DatabaseError::Configuration` naming
    ///   the offending parameter
    pub fn validate(&self) -> DatabaseResult<()> {
        if self.host.is_empty() {
            return Err(DatabaseError::Configuration(
                "DATABASE_HOST must not be empty".to_string(),
            ));
        }

        if self.database.is_empty() {
            return Err(DatabaseError::Configuration(
                "DATABASE_NAME must not be empty".to_string(),
            ));
        }

        if self.username.is_empty() {
            return Err(DatabaseError::Configuration(
                "DATABASE_USERNAME must not be empty".to_string(),
            ));
        }

        if self.connect_timeout.is_zero() {
            return Err(DatabaseError::Configuration(
                "DATABASE_CONNECT_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.query_timeout.is_zero() {
            return Err(DatabaseError::Configuration(
                "DATABASE_QUERY_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
    }
}

/// Open a single PostgreSQL connection
///
/// The returned handle is owned exclusively by the caller. The attempt is
/// bounded by `config.connect_timeout`.
///
/// # Arguments
///
/// * `config` - Database configuration
///
/// # Returns
///
/// * `DatabaseResult<PgConnection>` - live connection, or
///   `DatabaseError::Connection` / `DatabaseError::Timeout` on failure
pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<PgConnection> {
    let conn = tokio::time::timeout(
        config.connect_timeout,
        PgConnection::connect_with(&config.connect_options()),
    )
    .await
    .map_err(|_| DatabaseError::Timeout(config.connect_timeout))?
    .map_err(DatabaseError::Connection)?;

    info!(
        "Database connection established to {}:{}/{}",
        config.host, config.port, config.database
    );

    Ok(conn)
}

/// Check database connectivity
///
/// # Arguments
///
/// * `conn` - live database connection
///
/// # Returns
///
/// * `DatabaseResult<bool>` - True if the connection answers a trivial
///   query, error otherwise
pub async fn health_check(conn: &mut PgConnection) -> DatabaseResult<bool> {
    sqlx::query("SELECT 1")
        .execute(&mut *conn)
        .await
        .map_err(DatabaseError::Query)?;

    Ok(true)
}
