//! kabuboard: client and view projections for a stock recommendation feed.
//!
//! Fetches the board's `data.json` feed, classifies each record's
//! recommendation score, and derives the read-only views the page renders:
//! aggregate statistics, the curated shortlist, the full name-sorted table,
//! and per-record detail for the modal. Rendering itself is out of scope;
//! everything here produces plain data and display strings.

pub mod classify;
pub mod core;
pub mod dashboard;
pub mod feed;
pub mod format;
pub mod project;

pub use classify::{Category, RecommendationDisplay, clamp_score, classify};
pub use crate::core::{FeedClient, FeedClientBuilder, FeedError};
pub use dashboard::Dashboard;
pub use feed::{FeedBuilder, StockRecord};
pub use project::{RecordDetail, Shortlist, ShortlistCard, Statistics, TableRow};
