// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion between connection URLs and `RedisConfig`.
//!
//! The accepted form is `redis://[:password@]host:port/db[?db=N]`, with
//! `rediss://` selecting TLS. Missing parts fall back to the `RedisConfig`
//! defaults, so `rediss://` alone is a valid URL.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::redis_config::{RedisConfig, DEFAULT_DB, DEFAULT_HOST, DEFAULT_PORT};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::net::Ipv6Addr;
use url::{Host, ParseError, Url};

/// Scheme for plaintext connections.
pub const SCHEME: &str = "redis";

/// Scheme for TLS connections.
pub const SECURE_SCHEME: &str = "rediss";

/// Username written in front of the password; the server ignores it for `AUTH <password>`.
pub const PLACEHOLDER_USERNAME: &str = "";

/// Query parameter that overrides the db index taken from the path.
const DB_QUERY_PARAM: &str = "db";

/// Characters escaped in the userinfo component (WHATWG userinfo set plus `%`).
const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped in a non-IPv6 host (forbidden host code points plus `%`).
const HOST: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Parses a connection URL into a `RedisConfig`.
///
/// The db index comes from the `db` query parameter when present, otherwise from
/// the path. Unknown query parameters and any username are ignored. A missing
/// host or port falls back to the default, even when a password or port is given
/// (`redis://:pw@/2`, `redis://:6380`).
///
/// # Errors
///
/// * `ConfigError::EmptyUrl` - `url` is empty
/// * `ConfigError::InvalidUrl` - `url` is not a URL
/// * `ConfigError::UnsupportedScheme` - the scheme is not `redis` or `rediss`
/// * `ConfigError::InvalidDatabase` - the db index is not a non-negative integer
/// * `ConfigError::InvalidHost` - the decoded host is not UTF-8
/// * `ConfigError::InvalidPassword` - the decoded password is not UTF-8
///
/// # Examples
///
/// ```
/// use redisconfig::domain::url_codec::from_url;
///
/// let config = from_url("redis://:pw@host:1234/3").unwrap();
/// assert_eq!(config.host, "host");
/// assert_eq!(config.port, 1234);
/// assert_eq!(config.db, 3);
/// assert_eq!(config.password.as_deref(), Some("pw"));
/// assert!(!config.ssl);
/// ```
pub fn from_url(url: &str) -> Result<RedisConfig> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::EmptyUrl);
    }

    let parsed = match Url::parse(url) {
        Err(ParseError::EmptyHost) => insert_default_host(url)
            .ok_or(ParseError::EmptyHost)
            .and_then(|patched| Url::parse(&patched)),
        other => other,
    }
    .map_err(|e| ConfigError::invalid_url(url, e))?;

    let ssl = match parsed.scheme() {
        SCHEME => false,
        SECURE_SCHEME => true,
        other => {
            return Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            })
        }
    };

    let host = match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => percent_decode_str(domain)
            .decode_utf8()
            .map_err(|_| ConfigError::InvalidHost)?
            .into_owned(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => DEFAULT_HOST.to_string(),
    };

    let password = match parsed.password() {
        Some(encoded) if !encoded.is_empty() => Some(
            percent_decode_str(encoded)
                .decode_utf8()
                .map_err(|_| ConfigError::InvalidPassword)?
                .into_owned(),
        ),
        _ => None,
    };

    let db = match parsed.query_pairs().find(|(key, _)| key == DB_QUERY_PARAM) {
        Some((_, value)) => parse_db(&value)?,
        None => parse_db(parsed.path().trim_start_matches('/'))?,
    };

    let config = RedisConfig {
        host,
        port: parsed.port().unwrap_or(DEFAULT_PORT),
        db,
        ssl,
        password,
    };

    tracing::trace!(
        host = %config.host,
        port = config.port,
        db = config.db,
        ssl = config.ssl,
        "Parsed connection URL"
    );

    Ok(config)
}

/// Renders a `RedisConfig` as a connection URL.
///
/// The password, when set, is percent-encoded and preceded by the placeholder
/// username, giving `redis://:password@host:port/db`. An empty password is
/// omitted and an empty host renders as the default host. IPv6 hosts are
/// bracketed; other hosts are percent-encoded where the URL syntax requires it.
///
/// # Examples
///
/// ```
/// use redisconfig::domain::RedisConfig;
/// use redisconfig::domain::url_codec::to_url;
///
/// let config = RedisConfig::default().with_ssl(true);
/// assert_eq!(to_url(&config), "rediss://127.0.0.1:6379/0");
/// ```
pub fn to_url(config: &RedisConfig) -> String {
    let scheme = if config.ssl { SECURE_SCHEME } else { SCHEME };

    let host = if config.host.is_empty() {
        DEFAULT_HOST.to_string()
    } else if config.host.parse::<Ipv6Addr>().is_ok() {
        format!("[{}]", config.host)
    } else {
        utf8_percent_encode(&config.host, HOST).to_string()
    };

    match config.password.as_deref().filter(|p| !p.is_empty()) {
        Some(password) => format!(
            "{}://{}:{}@{}:{}/{}",
            scheme,
            PLACEHOLDER_USERNAME,
            utf8_percent_encode(password, USERINFO),
            host,
            config.port,
            config.db
        ),
        None => format!("{}://{}:{}/{}", scheme, host, config.port, config.db),
    }
}

/// Puts the default host into an authority that carries userinfo or a port but no host.
fn insert_default_host(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let host_start = rest[..authority_end].rfind('@').map_or(0, |at| at + 1);
    Some(format!(
        "{}://{}{}{}",
        scheme,
        &rest[..host_start],
        DEFAULT_HOST,
        &rest[host_start..]
    ))
}

/// Parses a db index; an empty value selects the default database.
fn parse_db(value: &str) -> Result<u32> {
    if value.is_empty() {
        return Ok(DEFAULT_DB);
    }
    value
        .parse::<u32>()
        .map_err(|e| ConfigError::from_parse_int_error(value, e))
}
