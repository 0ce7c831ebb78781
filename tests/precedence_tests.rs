// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for URL source precedence.

use redisconfig::prelude::*;

/// A source with a fixed value and configurable priority.
struct FixedSource {
    name: &'static str,
    priority: u8,
    url: Option<&'static str>,
}

impl UrlSource for FixedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn url(&self) -> Result<Option<String>> {
        Ok(self.url.map(str::to_string))
    }
}

#[test]
#[cfg(feature = "env")]
fn test_precedence_explicit_over_env() {
    let resolver = UrlResolver::builder()
        .with_source(Box::new(EnvVarSource::with_value(Some("redis://env-host/1"))))
        .with_url("redis://explicit-host/2")
        .build();

    let config = resolver.config().unwrap();
    assert_eq!(config.host, "explicit-host");
    assert_eq!(config.db, 2);
}

#[test]
#[cfg(all(feature = "cli", feature = "env"))]
fn test_precedence_cli_over_env() {
    let resolver = UrlResolver::builder()
        .with_source(Box::new(EnvVarSource::with_value(Some("redis://env-host/1"))))
        .with_cli_args(vec!["--redis-url", "redis://cli-host/3"])
        .build();

    assert_eq!(resolver.config().unwrap().host, "cli-host");
}

#[test]
#[cfg(all(feature = "cli", feature = "env"))]
fn test_precedence_env_when_cli_absent() {
    let resolver = UrlResolver::builder()
        .with_cli_args(vec!["--verbose"])
        .with_source(Box::new(EnvVarSource::with_value(Some("redis://env-host/1"))))
        .build();

    assert_eq!(resolver.config().unwrap().host, "env-host");
}

#[test]
#[cfg(feature = "env")]
fn test_precedence_empty_explicit_falls_back() {
    let resolver = UrlResolver::builder()
        .with_url("")
        .with_source(Box::new(EnvVarSource::with_value(Some("rediss://env-host/4"))))
        .build();

    let config = resolver.config().unwrap();
    assert!(config.ssl);
    assert_eq!(config.db, 4);
}

#[test]
fn test_precedence_custom_priorities() {
    let resolver = UrlResolver::builder()
        .with_source(Box::new(FixedSource {
            name: "vault",
            priority: 10,
            url: Some("redis://vault-host/0"),
        }))
        .with_url("redis://explicit-host/0")
        .with_source(Box::new(FixedSource {
            name: "fallback",
            priority: 0,
            url: Some("redis://fallback-host/0"),
        }))
        .build();

    assert_eq!(resolver.source_names(), vec!["vault", "explicit", "fallback"]);
    assert_eq!(resolver.config().unwrap().host, "vault-host");
}

#[test]
fn test_precedence_lowest_priority_as_last_resort() {
    let resolver = UrlResolver::builder()
        .with_source(Box::new(FixedSource {
            name: "primary",
            priority: 5,
            url: None,
        }))
        .with_source(Box::new(FixedSource {
            name: "fallback",
            priority: 0,
            url: Some("redis://fallback-host/0"),
        }))
        .build();

    assert_eq!(resolver.config().unwrap().host, "fallback-host");
}

#[test]
fn test_no_source_yields_missing_url() {
    let resolver = UrlResolver::builder()
        .with_source(Box::new(FixedSource {
            name: "empty",
            priority: 1,
            url: None,
        }))
        .build();

    let err = resolver.config().unwrap_err();
    assert!(matches!(err, ConfigError::MissingUrl { .. }));
    assert!(err.to_string().contains("empty"));
}
