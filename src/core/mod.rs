//! Core components of the feed client.
//!
//! - The main [`FeedClient`] and its builder.
//! - The primary [`FeedError`] type.

/// The main client (`FeedClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FeedError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::FeedClient`
pub use client::{FeedClient, FeedClientBuilder};
pub use error::FeedError;
