// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::env;
use std::sync::OnceLock;

/// Cached result of Docker availability check.
#[allow(dead_code)]
static DOCKER_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Checks if Docker is available on the system.
///
/// This check is cached after the first call.
#[allow(dead_code)]
pub fn is_docker_available() -> bool {
    *DOCKER_AVAILABLE.get_or_init(|| {
        std::process::Command::new("docker")
            .args(["ps"])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    })
}

/// Prints a warning message that a test is skipped due to Docker being unavailable.
#[allow(dead_code)]
pub fn print_docker_unavailable_warning(test_name: &str) {
    eprintln!("\n⚠️  SKIPPED: {} - Docker is not available", test_name);
    eprintln!("   To run this test, ensure Docker is installed and running.");
    eprintln!("   Installation: https://docs.docker.com/get-docker/\n");
}

/// Sets and removes environment variables, restoring prior values on drop.
#[allow(dead_code)]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { saved: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.save(key);
        env::set_var(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.save(key);
        env::remove_var(key);
    }

    fn save(&mut self, key: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}
