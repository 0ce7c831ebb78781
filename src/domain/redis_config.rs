// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Redis connection configuration value type.
//!
//! This module provides `RedisConfig`, a plain value holding everything needed to
//! reach a Redis server. It is constructed directly, parsed from a URL, or derived
//! from another configuration with the `with_*` copy-on-modify methods.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::url_codec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Host used when neither the configuration nor the URL names one.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Well-known Redis port.
pub const DEFAULT_PORT: u16 = 6379;

/// Database index selected when the URL carries none.
pub const DEFAULT_DB: u32 = 0;

/// Environment variable consulted when no explicit URL is given.
pub const DEFAULT_URL_ENV_VAR: &str = "REDIS_URL";

/// Structured connection parameters for a Redis server.
///
/// Every field has a default, so `RedisConfig::default()` describes a plaintext
/// connection to database 0 on `127.0.0.1:6379` without authentication.
///
/// The `Debug` representation masks the password.
///
/// # Examples
///
/// ```
/// use redisconfig::domain::RedisConfig;
///
/// let config = RedisConfig::default()
///     .with_host("example.com")
///     .with_db(3);
///
/// assert_eq!(config.port, 6379);
/// assert_eq!(config.url(), "redis://example.com:6379/3");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Server host name or IP address (IPv6 without brackets)
    pub host: String,
    /// Server TCP port
    pub port: u16,
    /// Logical database index
    pub db: u32,
    /// Whether to connect over TLS (`rediss://`)
    pub ssl: bool,
    /// Password for `AUTH`, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RedisConfig {
    /// Creates a configuration for the given host and port with all other fields defaulted.
    ///
    /// An empty host selects the default host; a bracketed IPv6 literal is stored
    /// without its brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use redisconfig::domain::RedisConfig;
    ///
    /// let config = RedisConfig::new("cache.internal", 6380);
    /// assert_eq!(config.host, "cache.internal");
    /// assert_eq!(config.db, 0);
    /// ```
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: normalize_host(host.into()),
            port,
            ..Self::default()
        }
    }

    /// Parses a configuration from a connection URL.
    ///
    /// Equivalent to [`crate::from_url`].
    pub fn from_url(url: &str) -> Result<Self> {
        url_codec::from_url(url)
    }

    /// Renders this configuration as a connection URL.
    ///
    /// Equivalent to [`crate::to_url`].
    ///
    /// # Examples
    ///
    /// ```
    /// use redisconfig::domain::RedisConfig;
    ///
    /// let config = RedisConfig::new("example.com", 1234)
    ///     .with_db(5)
    ///     .with_ssl(true)
    ///     .with_password("badpassword");
    /// assert_eq!(config.url(), "rediss://:badpassword@example.com:1234/5");
    /// ```
    pub fn url(&self) -> String {
        url_codec::to_url(self)
    }

    /// Returns a copy with the host replaced, normalized as in [`RedisConfig::new`].
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = normalize_host(host.into());
        self
    }

    /// Returns a copy with the port replaced.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Returns a copy with the database index replaced.
    pub fn with_db(mut self, db: u32) -> Self {
        self.db = db;
        self
    }

    /// Returns a copy with TLS switched on or off.
    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    /// Returns a copy with the password set. An empty password clears it.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        let password: String = password.into();
        self.password = Some(password).filter(|p| !p.is_empty());
        self
    }

    /// Returns a copy without a password.
    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }
}

fn normalize_host(host: String) -> String {
    if host.is_empty() {
        return DEFAULT_HOST.to_string();
    }
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        if inner.parse::<Ipv6Addr>().is_ok() {
            return inner.to_string();
        }
    }
    host
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db: DEFAULT_DB,
            ssl: false,
            password: None,
        }
    }
}

impl fmt::Debug for RedisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("db", &self.db)
            .field("ssl", &self.ssl)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl fmt::Display for RedisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

impl FromStr for RedisConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        url_codec::from_url(s)
    }
}
