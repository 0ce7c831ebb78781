// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL source for a value handed in by the caller.

use crate::domain::Result;
use crate::ports::UrlSource;

/// A URL passed directly by the caller, e.g. the `url` argument of [`crate::config`].
///
/// An empty string counts as absent, so the resolver falls through to the next
/// source.
///
/// # Examples
///
/// ```rust
/// use redisconfig::adapters::ExplicitUrl;
/// use redisconfig::ports::UrlSource;
///
/// let source = ExplicitUrl::new("redis://localhost:6379/0");
/// assert_eq!(source.priority(), 3);
/// assert!(source.url().unwrap().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitUrl(String);

impl ExplicitUrl {
    /// Wraps a URL.
    pub fn new(url: impl Into<String>) -> Self {
        ExplicitUrl(url.into())
    }
}

impl UrlSource for ExplicitUrl {
    fn name(&self) -> &str {
        "explicit"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn url(&self) -> Result<Option<String>> {
        if self.0.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.0.clone()))
    }
}
