// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL source trait definition.
//!
//! This module defines the `UrlSource` trait, the port through which the resolver
//! obtains a connection URL. Explicit values, environment variables and
//! command-line arguments are all adapters implementing it.

use crate::domain::Result;

/// A trait for origins of a connection URL.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so resolvers can be shared between threads.
///
/// # Priority
///
/// Each source has a priority value (0-255). Higher values are consulted first.
/// The built-in sources use:
///
/// - **3 (highest)**: Explicit values and command-line arguments
/// - **2**: Environment variables
///
/// # Examples
///
/// ```rust
/// use redisconfig::ports::UrlSource;
/// use redisconfig::domain::Result;
///
/// struct FixedSource;
///
/// impl UrlSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn url(&self) -> Result<Option<String>> {
///         Ok(Some("redis://cache.internal:6379/0".to_string()))
///     }
/// }
///
/// let source = FixedSource;
/// assert!(source.url().unwrap().is_some());
/// ```
pub trait UrlSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used in logs and in `ConfigError::MissingUrl`. It should be a
    /// short identifier like "explicit", "cli" or "env:REDIS_URL".
    fn name(&self) -> &str;

    /// Returns the priority of this source.
    ///
    /// When several sources provide a URL, the one with the highest priority wins.
    fn priority(&self) -> u8;

    /// Returns the URL held by this source.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(url))` - The source provides a URL
    /// * `Ok(None)` - The source has nothing to offer; the resolver moves on
    /// * `Err(ConfigError)` - Reading the source failed
    fn url(&self) -> Result<Option<String>>;
}
