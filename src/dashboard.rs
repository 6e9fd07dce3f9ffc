//! Page-level state: the record list plus the banner and loading flags the
//! rendering shell binds to.

use crate::core::{FeedClient, FeedError};
use crate::feed::{FeedBuilder, StockRecord};
use crate::project::{self, RecordDetail, Shortlist, Statistics, TableRow};

/// Application state for one board page.
///
/// The record list is replaced wholesale by each successful [`refresh`];
/// nothing else writes to it. A failed refresh leaves the previous list
/// (initially empty) untouched and raises the error banner instead. Single
/// writer, no interior mutability: callers drive it from one task.
///
/// [`refresh`]: Dashboard::refresh
#[derive(Debug)]
pub struct Dashboard {
    client: FeedClient,
    records: Vec<StockRecord>,
    banner: Option<String>,
    loading: bool,
}

impl Dashboard {
    /// Creates an empty dashboard over the given client.
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            records: Vec::new(),
            banner: None,
            loading: false,
        }
    }

    /// Fetch the feed and swap in the new record list.
    ///
    /// The loading flag is up for the duration of the call and cleared once
    /// the fetch settles, in success or failure. On failure the banner text
    /// is set from [`FeedError::user_message`] and the error also propagates
    /// to the caller.
    ///
    /// # Errors
    ///
    /// Any [`FeedError`] from the underlying fetch.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn refresh(&mut self) -> Result<(), FeedError> {
        self.loading = true;
        let outcome = FeedBuilder::new(&self.client).fetch().await;
        self.loading = false;

        match outcome {
            Ok(list) => {
                self.records = list;
                self.banner = None;
                Ok(())
            }
            Err(err) => {
                self.banner = Some(err.user_message().to_string());
                Err(err)
            }
        }
    }

    /// The current record list, in feed order.
    #[must_use]
    pub fn records(&self) -> &[StockRecord] {
        &self.records
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Banner text from the last failed refresh; `None` means hidden.
    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Statistics panel counts.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        project::statistics(&self.records)
    }

    /// The curated recommendation shortlist.
    #[must_use]
    pub fn shortlist(&self) -> Shortlist {
        project::shortlist(&self.records)
    }

    /// The full table, sorted by name.
    #[must_use]
    pub fn table(&self) -> Vec<TableRow> {
        project::table(&self.records)
    }

    /// Detail-modal content for the record at `index` (feed order), or
    /// `None` when out of range.
    #[must_use]
    pub fn detail(&self, index: usize) -> Option<RecordDetail> {
        self.records.get(index).map(project::detail)
    }
}
