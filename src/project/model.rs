use serde::Serialize;

/// Aggregate counts for the statistics panel.
///
/// `unknown`-classified records count toward `total` only, so
/// `buy + hold + sell <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of records in the feed.
    pub total: u64,
    /// Records classified buy.
    pub buy: u64,
    /// Records classified hold.
    pub hold: u64,
    /// Records classified sell.
    pub sell: u64,
}

/// One card in the recommendation shortlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortlistCard {
    /// Index of the record in feed order, for detail lookups.
    pub record_index: usize,
    /// Display name, `-` when missing.
    pub name: String,
    /// Security code, `-` when missing.
    pub code: String,
    /// `「買い推奨 (0.40)」`-style score line.
    pub score_line: String,
    /// Reason text truncated to the card's budget.
    pub reason: String,
}

/// The curated, size-capped recommendation view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Shortlist {
    /// Top picks, shown large. At most 3.
    pub featured: Vec<ShortlistCard>,
    /// The next picks after the featured slice. At most 12.
    pub other: Vec<ShortlistCard>,
}

/// One row of the full table, already in name-sorted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Index of the record in feed order, for detail lookups.
    pub record_index: usize,
    /// Display name, `-` when missing.
    pub name: String,
    /// Security code, `-` when missing.
    pub code: String,
    /// Formatted price, `-` when absent.
    pub price: String,
    /// Recommendation cell text, `-` when unknown.
    pub recommendation: String,
    /// CSS class hook (`recommendation-buy` etc.), empty for unknown.
    pub style_hint: &'static str,
}

/// Everything the detail modal shows for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordDetail {
    /// Display name, `-` when missing.
    pub name: String,
    /// Security code, `-` when missing.
    pub code: String,
    /// Formatted price, `-` when absent.
    pub price: String,
    /// Recommendation text, `-` when unknown.
    pub recommendation: String,
    /// Full, untruncated reason text.
    pub reason: String,
}
