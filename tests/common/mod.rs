#![allow(dead_code)]

use httpmock::MockServer;
use kabuboard::FeedClient;
use serde_json::{Value, json};
use url::Url;

/// A client pointed at the mock server's `/data.json`.
pub fn client_for(server: &MockServer) -> FeedClient {
    FeedClient::builder()
        .feed_url(Url::parse(&format!("{}/data.json", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// A minimal feed record with just a name and a score.
pub fn record(name: &str, score: f64) -> Value {
    json!({ "name": name, "recommendation": score })
}

/// Wrap records into the feed's success envelope.
pub fn payload(records: &[Value]) -> String {
    json!({ "data": records }).to_string()
}
