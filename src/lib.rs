// SPDX-License-Identifier: MIT OR Apache-2.0

//! Redis connection configuration from URLs and the environment.
//!
//! This crate converts between Redis connection URLs and a structured
//! [`RedisConfig`], resolves the URL from an explicit argument or the `REDIS_URL`
//! environment variable, and hands the result to the `redis` client.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: `RedisConfig`, the URL codec and errors
//! - **Ports**: The `UrlSource` trait every URL origin implements
//! - **Adapters**: Explicit values, environment variables and command-line arguments
//! - **Service**: `UrlResolver`, which queries sources in priority order
//!
//! # URL Format
//!
//! ```text
//! redis://[:password@]host:port/db[?db=N]
//! rediss://...                               (TLS)
//! ```
//!
//! Missing parts take the defaults `127.0.0.1`, `6379` and db `0`. A `db` query
//! parameter overrides the path.
//!
//! # Feature Flags
//!
//! - `env`: Enable environment variable support (default)
//! - `cli`: Enable command-line argument support (default)
//! - `redis`: Enable client construction through the `redis` crate (default)
//! - `tls`: Enable TLS support in the `redis` crate
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use redisconfig::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = redisconfig::from_url("redis://:pw@example.com:1234/3")?;
//! assert_eq!(config.db, 3);
//!
//! let url = redisconfig::to_url(&config.with_ssl(true));
//! assert_eq!(url, "rediss://:pw@example.com:1234/3");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
#[cfg(feature = "redis")]
pub mod connection;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(feature = "redis")]
pub use connection::ConnectionOptions;
pub use domain::{ConfigError, RedisConfig, Result, DEFAULT_URL_ENV_VAR};

use service::UrlResolver;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, RedisConfig, Result};
    pub use crate::ports::UrlSource;
    pub use crate::service::{UrlResolver, UrlResolverBuilder};

    #[cfg(feature = "redis")]
    pub use crate::connection::ConnectionOptions;

    // Re-export adapters based on feature flags
    pub use crate::adapters::ExplicitUrl;
    #[cfg(feature = "cli")]
    pub use crate::adapters::{CommandLineSource, RedisUrlArgs};
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarSource;
}

/// Parses a connection URL into a [`RedisConfig`].
///
/// # Errors
///
/// Returns `ConfigError::EmptyUrl` for an empty string, and a parse error for a
/// malformed URL. See [`domain::url_codec::from_url`].
pub fn from_url(url: &str) -> Result<RedisConfig> {
    domain::from_url(url)
}

/// Renders a [`RedisConfig`] as a connection URL.
pub fn to_url(config: &RedisConfig) -> String {
    domain::to_url(config)
}

/// Reads a connection URL from the environment.
///
/// Reads `var`, or `REDIS_URL` when `var` is `None`. Returns `None` when the
/// variable is unset, empty, or not valid unicode.
///
/// # Examples
///
/// ```rust
/// assert_eq!(redisconfig::url_from_env(Some("REDISCONFIG_DOC_UNSET")), None);
/// ```
#[cfg(feature = "env")]
pub fn url_from_env(var: Option<&str>) -> Option<String> {
    let source = adapters::EnvVarSource::with_var(var.unwrap_or(DEFAULT_URL_ENV_VAR));
    match ports::UrlSource::url(&source) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Ignoring environment variable: {}", e);
            None
        }
    }
}

/// Resolves the configuration from `url`, falling back to `REDIS_URL`.
///
/// An empty `url` is treated like `None`.
///
/// # Errors
///
/// Returns `ConfigError::MissingUrl` if neither `url` nor the environment
/// provides a URL, or a parse error if the URL found is malformed.
///
/// # Examples
///
/// ```rust
/// let config = redisconfig::config(Some("rediss://")).unwrap();
/// assert!(config.ssl);
/// ```
pub fn config(url: Option<&str>) -> Result<RedisConfig> {
    UrlResolver::with_defaults(url).config()
}

/// Resolves the configuration as [`config`] does and creates a `redis::Client`.
///
/// `options.db` and `options.password` take precedence over the values in the
/// URL; the remaining options are passed to the client as given.
///
/// # Errors
///
/// Returns any error from [`config`], or `ConfigError::ConnectionError` if the
/// client rejects the parameters.
///
/// # Examples
///
/// ```rust
/// use redisconfig::ConnectionOptions;
///
/// let client = redisconfig::connection(
///     Some("redis://:pw@localhost:6379/3"),
///     ConnectionOptions::new().db(5),
/// )
/// .unwrap();
/// assert_eq!(client.get_connection_info().redis.db, 5);
/// ```
#[cfg(feature = "redis")]
pub fn connection(url: Option<&str>, options: ConnectionOptions) -> Result<redis::Client> {
    config(url)?.connection(options)
}
