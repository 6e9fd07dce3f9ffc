use super::fetch::fetch_payload;
use super::model::StockRecord;
use crate::core::{FeedClient, FeedError};

/* ---------- Public entry point (mapping wire → public model) ---------- */

pub(super) async fn records(client: &FeedClient) -> Result<Vec<StockRecord>, FeedError> {
    let rows = fetch_payload(client).await?;

    Ok(rows
        .into_iter()
        .map(|n| StockRecord {
            name: n.name,
            code: n.code,
            current_price: n.current_price,
            recommendation: n.recommendation,
            reasons: n.reasons,
        })
        .collect())
}
