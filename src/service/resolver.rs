// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection URL resolver.
//!
//! This module provides `UrlResolver`, which consults a set of URL sources in
//! priority order and turns the first URL found into a `RedisConfig`.

use crate::adapters::ExplicitUrl;
use crate::domain::{from_url, ConfigError, RedisConfig, Result};
use crate::ports::UrlSource;

/// Resolves a connection URL from several sources.
///
/// Sources with higher priority values are queried first, and the first
/// non-empty URL is used. A failing source is logged and skipped.
///
/// # Examples
///
/// ```rust
/// use redisconfig::service::UrlResolver;
///
/// # fn main() -> redisconfig::domain::Result<()> {
/// let resolver = UrlResolver::builder()
///     .with_url("redis://cache.internal:6379/1")
///     .with_env_var()
///     .build();
///
/// let config = resolver.config()?;
/// assert_eq!(config.host, "cache.internal");
/// # Ok(())
/// # }
/// ```
pub struct UrlResolver {
    /// List of URL sources, maintained in priority order (highest first)
    sources: Vec<Box<dyn UrlSource>>,
}

impl UrlResolver {
    /// Creates a resolver with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates a new resolver builder.
    pub fn builder() -> UrlResolverBuilder {
        UrlResolverBuilder::new()
    }

    /// Creates the default resolver: the given URL, falling back to `REDIS_URL`.
    ///
    /// An empty or absent `url` defers to the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redisconfig::service::UrlResolver;
    ///
    /// let resolver = UrlResolver::with_defaults(Some("redis://host:1234/3"));
    /// assert_eq!(resolver.resolve_url().unwrap(), "redis://host:1234/3");
    /// ```
    pub fn with_defaults(url: Option<&str>) -> Self {
        let mut builder = Self::builder();

        if let Some(url) = url {
            builder = builder.with_url(url);
        }

        #[cfg(feature = "env")]
        {
            builder = builder.with_env_var();
        }

        builder.build()
    }

    /// Adds a URL source to the resolver.
    ///
    /// Sources are kept sorted by priority; sources of equal priority keep
    /// insertion order.
    pub fn add_source(&mut self, source: Box<dyn UrlSource>) {
        self.sources.push(source);
        self.sources
            .sort_by_key(|source| std::cmp::Reverse(source.priority()));
    }

    /// Returns the names of the sources in the order they are consulted.
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }

    /// Returns the first URL provided by any source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingUrl` if no source yields a non-empty URL.
    pub fn resolve_url(&self) -> Result<String> {
        for source in &self.sources {
            match source.url() {
                Ok(Some(url)) if !url.is_empty() => {
                    tracing::debug!("Resolved connection URL from source '{}'", source.name());
                    return Ok(url);
                }
                Ok(_) => continue,
                Err(e) => {
                    // Log the error but continue to next source
                    tracing::debug!("Error querying URL source '{}': {}", source.name(), e);
                    continue;
                }
            }
        }

        Err(ConfigError::MissingUrl {
            sources: self.source_names(),
        })
    }

    /// Resolves a URL and parses it into a `RedisConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingUrl` if no URL is available, or any error
    /// produced by [`from_url`] for the URL found.
    pub fn config(&self) -> Result<RedisConfig> {
        from_url(&self.resolve_url()?)
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `UrlResolver`.
///
/// # Examples
///
/// ```rust
/// use redisconfig::service::UrlResolverBuilder;
///
/// let resolver = UrlResolverBuilder::new()
///     .with_cli_args(vec!["--redis-url", "redis://from-cli/0"])
///     .with_env_var_named("CACHE_URL")
///     .build();
///
/// assert_eq!(resolver.source_names(), vec!["cli", "env:CACHE_URL"]);
/// ```
pub struct UrlResolverBuilder {
    /// Sources to add to the resolver
    sources: Vec<Box<dyn UrlSource>>,
}

impl UrlResolverBuilder {
    /// Creates a new builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a custom URL source.
    pub fn with_source(mut self, source: Box<dyn UrlSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds an explicit URL.
    pub fn with_url(self, url: impl Into<String>) -> Self {
        self.with_source(Box::new(ExplicitUrl::new(url)))
    }

    /// Adds the `REDIS_URL` environment variable as a source.
    #[cfg(feature = "env")]
    pub fn with_env_var(self) -> Self {
        use crate::adapters::EnvVarSource;
        self.with_source(Box::new(EnvVarSource::new()))
    }

    /// Adds a named environment variable as a source.
    #[cfg(feature = "env")]
    pub fn with_env_var_named(self, var: impl Into<String>) -> Self {
        use crate::adapters::EnvVarSource;
        self.with_source(Box::new(EnvVarSource::with_var(var)))
    }

    /// Adds the `--redis-url` flag from the given arguments as a source.
    #[cfg(feature = "cli")]
    pub fn with_cli_args<S: AsRef<str>>(self, args: Vec<S>) -> Self {
        use crate::adapters::CommandLineSource;
        self.with_source(Box::new(CommandLineSource::from_args(args)))
    }

    /// Builds the resolver.
    pub fn build(self) -> UrlResolver {
        let mut resolver = UrlResolver::new();
        for source in self.sources {
            resolver.add_source(source);
        }
        resolver
    }
}

impl Default for UrlResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
