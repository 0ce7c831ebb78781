// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hand-off from `RedisConfig` to the `redis` client.
//!
//! This module merges per-call overrides into a configuration and passes the
//! result to `redis::Client`. Connection management itself (pooling, retries,
//! the wire protocol) belongs to the client library.

use crate::domain::{ConfigError, RedisConfig, Result};
use redis::aio::MultiplexedConnection;
use redis::{Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use std::fmt;

/// Per-connection overrides and pass-through client options.
///
/// `db` and `password` replace the values stored in the `RedisConfig` when set.
/// `username` and `insecure` have no counterpart in the configuration and are
/// handed to the client untouched.
///
/// # Examples
///
/// ```rust
/// use redisconfig::ConnectionOptions;
///
/// let options = ConnectionOptions::new().db(2).password("override");
/// assert_eq!(options.db, Some(2));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Database index to select instead of the configured one
    pub db: Option<u32>,
    /// Password to use instead of the configured one
    pub password: Option<String>,
    /// ACL username sent with `AUTH`
    pub username: Option<String>,
    /// Skip TLS certificate verification (only meaningful for `rediss://`)
    pub insecure: bool,
}

impl ConnectionOptions {
    /// Creates options that change nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the database index.
    pub fn db(mut self, db: u32) -> Self {
        self.db = Some(db);
        self
    }

    /// Overrides the password. An empty password leaves the stored one in place.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        let password: String = password.into();
        self.password = Some(password).filter(|p| !p.is_empty());
        self
    }

    /// Sets the ACL username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Disables TLS certificate verification.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}

impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("db", &self.db)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("username", &self.username)
            .field("insecure", &self.insecure)
            .finish()
    }
}

impl RedisConfig {
    /// Builds the client parameters for this configuration with `options` applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redisconfig::{ConnectionOptions, RedisConfig};
    ///
    /// let config = RedisConfig::default().with_db(1).with_password("stored");
    /// let info = config.connection_info(&ConnectionOptions::new().db(4));
    ///
    /// assert_eq!(info.redis.db, 4);
    /// assert_eq!(info.redis.password.as_deref(), Some("stored"));
    /// ```
    pub fn connection_info(&self, options: &ConnectionOptions) -> ConnectionInfo {
        let addr = if self.ssl {
            ConnectionAddr::TcpTls {
                host: self.host.clone(),
                port: self.port,
                insecure: options.insecure,
                tls_params: None,
            }
        } else {
            ConnectionAddr::Tcp(self.host.clone(), self.port)
        };

        ConnectionInfo {
            addr,
            redis: RedisConnectionInfo {
                db: i64::from(options.db.unwrap_or(self.db)),
                username: options.username.clone(),
                password: options
                    .password
                    .clone()
                    .or_else(|| self.password.clone())
                    .filter(|p| !p.is_empty()),
            },
        }
    }

    /// Creates a `redis::Client` for this configuration with `options` applied.
    ///
    /// The client connects lazily; no network traffic happens here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConnectionError` if the client rejects the parameters.
    pub fn connection(&self, options: ConnectionOptions) -> Result<Client> {
        tracing::debug!(
            host = %self.host,
            port = self.port,
            db = options.db.unwrap_or(self.db),
            ssl = self.ssl,
            "Creating Redis client"
        );

        Client::open(self.connection_info(&options)).map_err(|e| ConfigError::ConnectionError {
            message: "Failed to create Redis client".to_string(),
            source: e,
        })
    }

    /// Opens a multiplexed async connection for this configuration.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConnectionError` if the client cannot be created or
    /// the server cannot be reached.
    pub async fn connect_async(&self, options: ConnectionOptions) -> Result<MultiplexedConnection> {
        let client = self.connection(options)?;
        client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| ConfigError::ConnectionError {
                message: format!("Failed to connect to Redis at {}:{}", self.host, self.port),
                source: e,
            })
    }
}
