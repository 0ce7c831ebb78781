// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the URL resolver.
//!
//! The resolver orchestrates the URL sources from the adapters layer and hands
//! the winning URL to the domain codec.

pub mod resolver;

// Re-export commonly used types
pub use resolver::{UrlResolver, UrlResolverBuilder};
