//! Core components of the `tsetmc-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`TsClient`] and its builder.
//! - The primary [`TsError`] type.
//! - The typed [`tree`] used by incremental feeds, and [`deep_merge`] over it.
//! - Internal networking and decoding helpers.

/// The main client (`TsClient`), builder, and configuration.
pub mod client;
/// Date/time/number decoding for the compact wire encodings.
pub mod conversions;
/// The primary error type (`TsError`) for the crate.
pub mod error;
/// Typed field trees and the deep merge used by incremental feeds.
pub mod tree;
pub(crate) mod view;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::TsClient`
pub use client::{TsClient, TsClientBuilder};
pub use error::TsError;
pub use tree::{Branch, Leaf, Tree, deep_merge};
