use serde_json::Value;

use super::wire::{FeedEnvelope, RecordNode};
use crate::core::{FeedClient, FeedError};

/* ---------- Single focused fetch, always from the network ---------- */

/// One retrieval of the whole feed. Sends `Cache-Control: no-store` so no
/// intermediary serves a stale copy; stale data is worse than no data for a
/// price board.
pub(super) async fn fetch_payload(client: &FeedClient) -> Result<Vec<RecordNode>, FeedError> {
    let url = client.feed_url().clone();

    let resp = client
        .http()
        .get(url.clone())
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FeedError::Server {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let text = resp.text().await?;
    let env: FeedEnvelope = serde_json::from_str(&text)
        .map_err(|e| FeedError::Malformed(format!("feed json parse: {e}")))?;

    let rows = match env.data {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(FeedError::Malformed(
                "payload `data` is missing or not an array".into(),
            ));
        }
    };

    Ok(rows.into_iter().map(RecordNode::from_value).collect())
}
