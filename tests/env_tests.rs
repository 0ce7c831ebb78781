// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests that mutate `REDIS_URL`.
//!
//! The process environment is shared by every test in a binary, so all
//! scenarios touching the default variable run sequentially inside one test.

#![cfg(all(feature = "env", feature = "redis"))]

mod common;

use common::EnvGuard;
use redisconfig::prelude::*;
use redisconfig::DEFAULT_URL_ENV_VAR;

#[test]
fn test_default_env_var_resolution() {
    let mut guard = EnvGuard::new();

    // Nothing anywhere
    guard.remove(DEFAULT_URL_ENV_VAR);
    assert_eq!(redisconfig::url_from_env(None), None);
    match redisconfig::config(None) {
        Err(ConfigError::MissingUrl { sources }) => {
            assert_eq!(sources, vec!["env:REDIS_URL"]);
        }
        other => panic!("expected MissingUrl, got {:?}", other),
    }

    // Empty explicit URL and no environment behaves like no URL at all
    assert!(matches!(
        redisconfig::config(Some("")),
        Err(ConfigError::MissingUrl { .. })
    ));

    // Empty variable counts as unset
    guard.set(DEFAULT_URL_ENV_VAR, "");
    assert_eq!(redisconfig::url_from_env(None), None);
    assert!(redisconfig::config(None).is_err());

    // Environment only
    guard.set(DEFAULT_URL_ENV_VAR, "redis://:envpw@env-host:7000/6");
    assert_eq!(
        redisconfig::url_from_env(None).as_deref(),
        Some("redis://:envpw@env-host:7000/6")
    );
    let config = redisconfig::config(None).unwrap();
    assert_eq!(config.host, "env-host");
    assert_eq!(config.port, 7000);
    assert_eq!(config.db, 6);
    assert_eq!(config.password.as_deref(), Some("envpw"));

    // Explicit URL wins over the environment
    let config = redisconfig::config(Some("rediss://explicit/1")).unwrap();
    assert_eq!(config.host, "explicit");
    assert!(config.ssl);

    // Empty explicit URL falls back to the environment
    let config = redisconfig::config(Some("")).unwrap();
    assert_eq!(config.host, "env-host");

    // Custom variable name does not read REDIS_URL
    guard.remove("REDISCONFIG_ENV_TEST_CUSTOM");
    assert_eq!(redisconfig::url_from_env(Some("REDISCONFIG_ENV_TEST_CUSTOM")), None);
    guard.set("REDISCONFIG_ENV_TEST_CUSTOM", "redis://custom/0");
    assert_eq!(
        redisconfig::url_from_env(Some("REDISCONFIG_ENV_TEST_CUSTOM")).as_deref(),
        Some("redis://custom/0")
    );

    // connection() resolves from the environment and applies overrides
    let client =
        redisconfig::connection(None, ConnectionOptions::new().db(9)).unwrap();
    let info = client.get_connection_info();
    assert_eq!(info.redis.db, 9);
    assert_eq!(info.redis.password.as_deref(), Some("envpw"));

    // Malformed environment URL surfaces as a parse error
    guard.set(DEFAULT_URL_ENV_VAR, "redis://env-host/not-a-db");
    assert!(matches!(
        redisconfig::config(None),
        Err(ConfigError::InvalidDatabase { .. })
    ));
}
