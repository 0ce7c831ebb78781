// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument URL source adapter.
//!
//! This module provides a source that picks the connection URL out of
//! command-line arguments, and a `clap` argument group applications can flatten
//! into their own parsers.

use crate::domain::Result;
use crate::ports::UrlSource;

/// Flag recognized by `CommandLineSource` unless configured otherwise.
pub const DEFAULT_URL_FLAG: &str = "redis-url";

/// `clap` argument group carrying the connection URL.
///
/// Flatten it into an application's parser and turn it into a source:
///
/// ```rust
/// use clap::Parser;
/// use redisconfig::adapters::{CommandLineSource, RedisUrlArgs};
/// use redisconfig::ports::UrlSource;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     redis: RedisUrlArgs,
/// }
///
/// let cli = Cli::parse_from(["app", "--redis-url", "redis://cache:6379/2"]);
/// let source = CommandLineSource::from(cli.redis);
/// assert_eq!(source.url().unwrap().as_deref(), Some("redis://cache:6379/2"));
/// ```
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RedisUrlArgs {
    /// Redis connection URL (redis://[:password@]host:port/db)
    #[arg(long = "redis-url", value_name = "URL")]
    pub redis_url: Option<String>,
}

/// URL source backed by command-line arguments.
///
/// Recognizes `--redis-url=<url>` and `--redis-url <url>`. If the flag appears more
/// than once the last occurrence wins. Other arguments are ignored.
///
/// # Priority
///
/// Command-line arguments have the highest priority (3), overriding environment
/// variables (priority 2).
///
/// # Examples
///
/// ```rust
/// use redisconfig::adapters::CommandLineSource;
/// use redisconfig::ports::UrlSource;
///
/// let args = vec!["--verbose", "--redis-url", "rediss://cache:6380/1"];
/// let source = CommandLineSource::from_args(args);
/// assert_eq!(source.url().unwrap().as_deref(), Some("rediss://cache:6380/1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineSource {
    /// The URL found in the arguments
    value: Option<String>,
}

impl CommandLineSource {
    /// Creates a source from a list of arguments using the `--redis-url` flag.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        Self::from_args_with_flag(args, DEFAULT_URL_FLAG)
    }

    /// Creates a source from a list of arguments using a custom long flag (without dashes).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redisconfig::adapters::CommandLineSource;
    /// use redisconfig::ports::UrlSource;
    ///
    /// let source = CommandLineSource::from_args_with_flag(vec!["--cache=redis://c/0"], "cache");
    /// assert_eq!(source.url().unwrap().as_deref(), Some("redis://c/0"));
    /// ```
    pub fn from_args_with_flag<S: AsRef<str>>(args: Vec<S>, flag: &str) -> Self {
        Self {
            value: parse_args(&args, flag),
        }
    }

    /// Creates a source from the process's command-line arguments.
    ///
    /// This skips the first argument (the program name).
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(args)
    }
}

impl From<RedisUrlArgs> for CommandLineSource {
    fn from(args: RedisUrlArgs) -> Self {
        Self {
            value: args.redis_url,
        }
    }
}

/// Extracts the value of `--<flag>` from the arguments.
fn parse_args<S: AsRef<str>>(args: &[S], flag: &str) -> Option<String> {
    let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
    let mut value = None;
    let mut iter = args.into_iter().peekable();

    while let Some(arg) = iter.next() {
        let Some(name) = arg.strip_prefix("--") else {
            continue;
        };

        // --flag=value
        if let Some((key, v)) = name.split_once('=') {
            if key == flag {
                value = Some(v.to_string());
            }
            continue;
        }

        // --flag value, unless the next argument is another flag
        if name == flag {
            if let Some(next) = iter.next_if(|next| !next.starts_with('-')) {
                value = Some(next.to_string());
            }
        }
    }

    value
}

impl UrlSource for CommandLineSource {
    fn name(&self) -> &str {
        "cli"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn url(&self) -> Result<Option<String>> {
        Ok(self.value.clone().filter(|v| !v.is_empty()))
    }
}
