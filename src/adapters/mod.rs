// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing URL source implementations.
//!
//! Each adapter implements the `UrlSource` port for one origin of a connection
//! URL.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;
pub mod explicit;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::{CommandLineSource, RedisUrlArgs};
#[cfg(feature = "env")]
pub use env_var::EnvVarSource;
pub use explicit::ExplicitUrl;
