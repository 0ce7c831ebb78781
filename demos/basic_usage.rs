// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the redisconfig crate.
//!
//! This example demonstrates:
//! - Parsing a connection URL into a `RedisConfig`
//! - Deriving variants with the copy-on-modify methods
//! - Resolving the URL from the command line or `REDIS_URL`
//! - Creating a client with per-connection overrides
//!
//! To run this example:
//! ```bash
//! export REDIS_URL="redis://:secret@localhost:6379/2"
//! cargo run --example basic_usage
//!
//! # Or pass the URL explicitly
//! cargo run --example basic_usage -- --redis-url rediss://cache.example.com:6380/1
//! ```

use redisconfig::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== redisconfig: Basic Usage ===\n");

    // Example 1: URL to struct and back
    println!("--- Example 1: Parsing ---");
    let config = redisconfig::from_url("redis://:notagoodpassword@example.com:1234/3")?;
    println!("Parsed: {:?}", config);
    println!("Secure variant: {}", config.clone().with_ssl(true));

    // Example 2: Resolve from the command line, falling back to REDIS_URL
    println!("\n--- Example 2: Resolution ---");
    let resolver = UrlResolver::builder()
        .with_source(Box::new(CommandLineSource::from_env_args()))
        .with_env_var()
        .build();

    let config = match resolver.config() {
        Ok(config) => {
            println!("✓ Resolved: {:?}", config);
            config
        }
        Err(e) => {
            println!("✗ {}", e);
            println!("  Using defaults instead");
            RedisConfig::default()
        }
    };

    // Example 3: Hand the configuration to the client
    println!("\n--- Example 3: Client ---");
    let client = config.connection(ConnectionOptions::new().db(0))?;
    println!("Client targets {:?}", client.get_connection_info().addr);

    Ok(())
}
