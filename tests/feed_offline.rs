mod common;

use httpmock::Method::GET;
use httpmock::MockServer;
use kabuboard::FeedBuilder;
use serde_json::json;

#[tokio::test]
async fn fetch_returns_records_in_feed_order() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/data.json")
            .header("cache-control", "no-store");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::payload(&[
                json!({
                    "name": "トヨタ自動車",
                    "code": "7203",
                    "currentPrice": 2520,
                    "recommendation": 0.35,
                    "reasonsForRecommendation": "堅調な業績"
                }),
                json!({ "name": "B社" }),
            ]));
    });

    let client = common::client_for(&server);
    let records = FeedBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].name.as_deref(), Some("トヨタ自動車"));
    assert_eq!(records[0].code.as_deref(), Some("7203"));
    assert_eq!(records[0].current_price, Some(2520.0));
    assert_eq!(records[0].recommendation, Some(0.35));
    assert_eq!(records[0].reasons.as_deref(), Some("堅調な業績"));

    assert_eq!(records[1].name.as_deref(), Some("B社"));
    assert_eq!(records[1].code, None);
    assert_eq!(records[1].current_price, None);
    assert_eq!(records[1].recommendation, None);
}

#[tokio::test]
async fn fetch_tolerates_bad_record_fields() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::payload(&[
                // numeric-like strings coerce, garbage degrades to None
                json!({
                    "name": 7203,
                    "code": ["not", "a", "code"],
                    "currentPrice": "2520.5",
                    "recommendation": "not-a-number"
                }),
                // a non-object element becomes an all-None record
                json!("garbage"),
            ]));
    });

    let client = common::client_for(&server);
    let records = FeedBuilder::new(&client).fetch().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name.as_deref(), Some("7203"));
    assert_eq!(records[0].code, None);
    assert_eq!(records[0].current_price, Some(2520.5));
    assert_eq!(records[0].recommendation, None);

    assert_eq!(records[1], kabuboard::StockRecord::default());
}

#[tokio::test]
async fn fetch_accepts_an_empty_feed() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/data.json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data":[]}"#);
    });

    let client = common::client_for(&server);
    let records = FeedBuilder::new(&client).fetch().await.unwrap();

    assert!(records.is_empty());
}
