use serde::Serialize;

/// One ticker's data as received from the feed.
///
/// Every field is optional: the fetch does no per-record validation, and a
/// field of the wrong type degrades to `None`. Invalid values are handled
/// defensively at display time by the classifier and formatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockRecord {
    /// Display name.
    pub name: Option<String>,
    /// Security identifier (証券コード).
    pub code: Option<String>,
    /// Latest price in yen; `None` when missing or not a finite number.
    pub current_price: Option<f64>,
    /// Raw recommendation score, unclamped; `None` when not numeric.
    pub recommendation: Option<f64>,
    /// Free-text rationale for the recommendation.
    pub reasons: Option<String>,
}
