// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable URL source adapter.
//!
//! This module provides a source that reads the connection URL from a single
//! environment variable, `REDIS_URL` unless configured otherwise.

use crate::domain::{ConfigError, Result, DEFAULT_URL_ENV_VAR};
use crate::ports::UrlSource;
use std::env::{self, VarError};

/// Maximum length for the URL value (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 65536;

/// URL source adapter for an environment variable.
///
/// The variable is read on every call, so changes to the process environment are
/// picked up without rebuilding the source. Unset and empty variables both count
/// as absent.
///
/// # Priority
///
/// Environment variables have a priority of 2, which means they are overridden by
/// explicit values and command-line arguments (priority 3).
///
/// # Examples
///
/// ```rust
/// use redisconfig::adapters::EnvVarSource;
/// use redisconfig::ports::UrlSource;
///
/// // Read REDIS_URL
/// let source = EnvVarSource::new();
/// assert_eq!(source.var(), "REDIS_URL");
///
/// // Read a different variable
/// let source = EnvVarSource::with_var("CACHE_URL");
/// assert_eq!(source.name(), "env:CACHE_URL");
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarSource {
    /// Name of the environment variable
    var: String,
    /// Source name reported in logs and errors
    name: String,
    /// Fixed value used instead of the process environment
    value: Option<Option<String>>,
}

impl EnvVarSource {
    /// Creates a source reading `REDIS_URL`.
    pub fn new() -> Self {
        Self::with_var(DEFAULT_URL_ENV_VAR)
    }

    /// Creates a source reading the given environment variable.
    ///
    /// # Arguments
    ///
    /// * `var` - The environment variable name (e.g., "CACHE_URL")
    pub fn with_var(var: impl Into<String>) -> Self {
        let var = var.into();
        Self {
            name: format!("env:{}", var),
            var,
            value: None,
        }
    }

    /// Creates a source with a fixed value for testing.
    ///
    /// **Note**: This method is primarily intended for testing. It lets tests
    /// describe the environment without mutating the process environment, which
    /// is shared between concurrently running tests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redisconfig::adapters::EnvVarSource;
    /// use redisconfig::ports::UrlSource;
    ///
    /// let source = EnvVarSource::with_value(Some("redis://test:6379/0"));
    /// assert_eq!(source.url().unwrap().as_deref(), Some("redis://test:6379/0"));
    ///
    /// let unset = EnvVarSource::with_value(None::<String>);
    /// assert_eq!(unset.url().unwrap(), None);
    /// ```
    pub fn with_value(value: Option<impl Into<String>>) -> Self {
        Self {
            value: Some(value.map(Into::into)),
            ..Self::new()
        }
    }

    /// Returns the name of the environment variable this source reads.
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Reads the variable from the process environment.
    fn load(&self) -> Result<Option<String>> {
        match env::var(&self.var) {
            Ok(value) if value.len() > MAX_ENV_VALUE_LEN => {
                tracing::debug!(
                    "Skipping oversized environment variable {}: value_len={} (max={})",
                    self.var,
                    value.len(),
                    MAX_ENV_VALUE_LEN
                );
                Ok(None)
            }
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e @ VarError::NotUnicode(_)) => Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "value is not valid unicode".to_string(),
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl Default for EnvVarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlSource for EnvVarSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        2
    }

    fn url(&self) -> Result<Option<String>> {
        let value = match &self.value {
            Some(fixed) => fixed.clone(),
            None => self.load()?,
        };
        Ok(value.filter(|v| !v.is_empty()))
    }
}
