// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the redisconfig crate.
//!
//! This module defines the errors that can occur while parsing connection URLs,
//! resolving a URL from its sources, or handing a configuration to the client.
//! All errors use `thiserror` for proper error handling and conversion.
//!
//! No variant ever carries a password in its message.

use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for redisconfig operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use redisconfig::domain::errors::ConfigError;
///
/// fn parse(url: &str) -> Result<(), ConfigError> {
///     if url.is_empty() {
///         return Err(ConfigError::EmptyUrl);
///     }
///     Ok(())
/// }
///
/// assert!(parse("").is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An empty URL was passed to the parser.
    #[error("Connection URL must not be empty")]
    EmptyUrl,

    /// No URL could be obtained from any source.
    #[error("No connection URL available (checked: {})", .sources.join(", "))]
    MissingUrl {
        /// Names of the sources that were consulted, highest priority first
        sources: Vec<String>,
    },

    /// The URL could not be parsed.
    #[error("Invalid connection URL '{url}': {source}")]
    InvalidUrl {
        /// The offending URL with any password removed
        url: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The URL scheme is neither `redis` nor `rediss`.
    #[error("Unsupported URL scheme '{scheme}' (expected 'redis' or 'rediss')")]
    UnsupportedScheme {
        /// The scheme found in the URL
        scheme: String,
    },

    /// The database index is not a non-negative integer.
    #[error("Invalid database index '{value}': {source}")]
    InvalidDatabase {
        /// The raw db value from the path or query
        value: String,
        /// The underlying conversion error
        #[source]
        source: ParseIntError,
    },

    /// The host is not valid UTF-8 once percent-decoded.
    #[error("Host in connection URL is not valid UTF-8")]
    InvalidHost,

    /// The password is not valid UTF-8 once percent-decoded.
    #[error("Password in connection URL is not valid UTF-8")]
    InvalidPassword,

    /// An error occurred in a URL source.
    #[error("URL source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The client library rejected the configuration or failed to connect.
    #[cfg(feature = "redis")]
    #[error("Redis connection error: {message}")]
    ConnectionError {
        /// The error message
        message: String,
        /// The underlying client error
        #[source]
        source: redis::RedisError,
    },
}

impl ConfigError {
    /// Creates an `InvalidDatabase` error from a `ParseIntError`.
    pub fn from_parse_int_error(value: impl Into<String>, err: ParseIntError) -> Self {
        ConfigError::InvalidDatabase {
            value: value.into(),
            source: err,
        }
    }

    /// Creates an `InvalidUrl` error, stripping any password from the reported URL.
    pub fn invalid_url(url: &str, err: url::ParseError) -> Self {
        ConfigError::InvalidUrl {
            url: redact_userinfo(url),
            source: err,
        }
    }
}

/// Replaces everything between `://` and the last `@` of the authority with `***`.
fn redact_userinfo(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://***{}", scheme, &rest[at..]),
        None => url.to_string(),
    }
}

/// A specialized Result type for redisconfig operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_error() {
        assert_eq!(
            ConfigError::EmptyUrl.to_string(),
            "Connection URL must not be empty"
        );
    }

    #[test]
    fn test_missing_url_lists_sources() {
        let error = ConfigError::MissingUrl {
            sources: vec!["explicit".to_string(), "env:REDIS_URL".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "No connection URL available (checked: explicit, env:REDIS_URL)"
        );
    }

    #[test]
    fn test_invalid_database_error() {
        let parse_err = "abc".parse::<u32>().unwrap_err();
        let error = ConfigError::from_parse_int_error("abc", parse_err);
        assert!(matches!(error, ConfigError::InvalidDatabase { .. }));
        assert!(error.to_string().contains("'abc'"));
    }

    #[test]
    fn test_invalid_url_hides_password() {
        let error = ConfigError::invalid_url(
            "redis://:s3cret@host:99999/0",
            url::ParseError::InvalidPort,
        );
        let message = error.to_string();
        assert!(!message.contains("s3cret"));
        assert!(message.contains("redis://***@host:99999/0"));
    }

    #[test]
    fn test_redact_userinfo_without_credentials() {
        assert_eq!(redact_userinfo("redis://host/0"), "redis://host/0");
        assert_eq!(redact_userinfo("not a url"), "not a url");
        assert_eq!(redact_userinfo("redis://host/a@b"), "redis://host/a@b");
    }

    #[test]
    fn test_invalid_host_error() {
        assert_eq!(
            ConfigError::InvalidHost.to_string(),
            "Host in connection URL is not valid UTF-8"
        );
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "env:REDIS_URL".to_string(),
            message: "value is not valid unicode".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "URL source 'env:REDIS_URL' error: value is not valid unicode"
        );
    }
}
