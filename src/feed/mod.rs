mod api;
mod model;

mod fetch;
mod wire;

pub use model::StockRecord;

use crate::core::{FeedClient, FeedError};

/// A builder for one retrieval of the record feed.
pub struct FeedBuilder {
    client: FeedClient,
}

impl FeedBuilder {
    /// Creates a new `FeedBuilder` over the given client.
    pub fn new(client: &FeedClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Fetches the feed and returns the record list in feed order.
    ///
    /// The request always goes to the network (no caching); individual
    /// records are returned as-is, with invalid fields degraded to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Server`] on a non-success status,
    /// [`FeedError::Malformed`] when the body does not parse or lacks a
    /// `data` array, and [`FeedError::Network`] on transport failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<StockRecord>, FeedError> {
        api::records(&self.client).await
    }
}
