// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the connection configuration value, the URL codec that
//! maps it to and from connection URLs, and the crate's error type. It is
//! independent of where URLs come from and of the client library.

pub mod errors;
pub mod redis_config;
pub mod url_codec;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use redis_config::{
    RedisConfig, DEFAULT_DB, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_URL_ENV_VAR,
};
pub use url_codec::{from_url, to_url};
